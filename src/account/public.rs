//! Module implementing public key operations.

use crate::{encoding, hash};
use ethaddr::Address;
use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use std::fmt::{self, Display, Formatter};

/// A public key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey(pub k256::PublicKey);

impl PublicKey {
    /// Returns an uncompressed encoded bytes for the public key.
    pub fn encode_uncompressed(&self) -> [u8; 65] {
        self.0
            .to_encoded_point(false)
            .as_bytes()
            .try_into()
            .expect("unexpected uncompressed public key length")
    }

    /// Returns the SEC1 compressed encoding of the public key.
    pub fn encode_compressed(&self) -> [u8; 33] {
        self.0
            .to_encoded_point(true)
            .as_bytes()
            .try_into()
            .expect("unexpected compressed public key length")
    }

    /// Returns the Ethereum address for the public key.
    pub fn address(&self) -> Address {
        // NOTE: An ethereum address is the last 20 bytes of the keccak hash of
        // the public key coordinates. The uncompressed encoding is prefixed
        // with a 0x04 tag that does not take part in the hash.
        let public_key = self.encode_uncompressed();
        debug_assert_eq!(public_key[0], 0x04);
        let hash = hash::keccak256(&public_key[1..]);

        let mut address = [0; 20];
        address.copy_from_slice(&hash[12..]);
        Address(address)
    }
}

impl From<k256::PublicKey> for PublicKey {
    fn from(key: k256::PublicKey) -> Self {
        Self(key)
    }
}

/// Formats the uncompressed public key as `0x04` followed by the 64 bytes of
/// its coordinates.
impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&encoding::encode_prefixed(self.encode_uncompressed()))
    }
}

/// Computes the Ethereum address of a public key.
pub fn address_from_public(public: &PublicKey) -> Address {
    public.address()
}
