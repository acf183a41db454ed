//! Module implementing `secp256k1` accounts: private keys, public keys and
//! their Ethereum addresses.

mod batch;
mod public;
pub mod validation;

pub use self::{
    batch::generate_keypairs,
    public::{address_from_public, PublicKey},
    validation::{validate_private_key, validate_secret_key, KeyPolicy},
};
use crate::{
    encoding::{self, HexError},
    rand,
};
pub use ethaddr::Address;
use k256::SecretKey;
use std::{
    fmt::{self, Debug, Formatter},
    io,
    str::FromStr,
};
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors accepting or producing a private key.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("private key is missing")]
    NilKey,
    #[error("private key is zero")]
    ZeroKey,
    #[error("private key is smaller than the minimum value {0}")]
    TooSmall(u64),
    #[error("private key is not smaller than the secp256k1 curve order")]
    TooLarge,
    #[error("private key must be 32 bytes but got {0}")]
    InvalidLength(usize),
    #[error("invalid private key hex")]
    Hex(#[from] HexError),
    #[error("failed to read system randomness")]
    Rng(#[from] io::Error),
}

/// A struct representing an Ethereum private key.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Creates a private key from a 32-byte big-endian secret.
    ///
    /// The secret must be a valid non-zero scalar smaller than the curve
    /// order. No minimum value policy is applied here, see
    /// [`validate_private_key`] for that.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, KeyError> {
        let secret = secret.as_ref();
        if secret.len() != 32 {
            return Err(KeyError::InvalidLength(secret.len()));
        }

        // NOTE: Run the range checks first so that we can report which bound
        // was violated; `k256` only tells us that the scalar was invalid.
        validate_private_key(secret, &KeyPolicy { min_private_key: 1 })?;
        let key = SecretKey::from_slice(secret).map_err(|_| KeyError::TooLarge)?;
        Ok(Self(key))
    }

    /// Returns the big-endian bytes of the private key scalar.
    pub fn secret(&self) -> Zeroizing<[u8; 32]> {
        let mut secret = Zeroizing::new([0u8; 32]);
        secret.copy_from_slice(&self.0.to_bytes());
        secret
    }

    /// Returns the `0x`-prefixed hex encoding of the private key.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(encoding::encode_prefixed(&*self.secret()))
    }

    /// Returns the public key for the private key.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    /// Returns the public address for the private key.
    pub fn address(&self) -> Address {
        self.public().address()
    }

    pub(crate) fn as_secret_key(&self) -> &SecretKey {
        &self.0
    }
}

impl From<SecretKey> for PrivateKey {
    fn from(key: SecretKey) -> Self {
        Self(key)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&self.address()).finish()
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secret = Zeroizing::new(encoding::decode(s)?);
        Self::new(&*secret)
    }
}

/// Computes the public key for a private key.
pub fn public_from_private(key: &PrivateKey) -> PublicKey {
    key.public()
}

/// A private key together with its public key and address.
#[derive(Clone, Debug)]
pub struct Keypair {
    pub private: PrivateKey,
    pub public: PublicKey,
    pub address: Address,
}

impl Keypair {
    /// Generates a new keypair from system randomness.
    ///
    /// The generated scalar is checked against the policy and an error is
    /// returned if it is rejected. Retrying is left to the caller.
    pub fn generate(policy: &KeyPolicy) -> Result<Self, KeyError> {
        let mut secret = Zeroizing::new([0u8; 32]);
        rand::get_entropy(&mut secret[..])?;
        validate_private_key(&secret[..], policy)?;

        let keypair = Self::from(PrivateKey::new(&secret[..])?);
        tracing::trace!(address = %keypair.address, "generated keypair");
        Ok(keypair)
    }
}

impl From<PrivateKey> for Keypair {
    fn from(private: PrivateKey) -> Self {
        let public = private.public();
        let address = public.address();
        Self {
            private,
            public,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testvectors;
    use hex_literal::hex;

    #[test]
    fn ganache_deterministic_address() {
        let key = PrivateKey::new(testvectors::GANACHE_PRIVATE_KEY).unwrap();
        assert_eq!(
            key.address(),
            Address(hex!("90F8bf6A479f320ead074411a4B0e7944Ea8c9C1")),
        );
    }

    #[test]
    fn address_and_public_key_from_private_key() {
        let key = "0x63e21d10fd50155dbba0e7d3f7431a400b84b4c2ac1ee38872f82448fe3ecfb9"
            .parse::<PrivateKey>()
            .unwrap();
        assert_eq!(
            key.public().to_string(),
            "0x046005c86a6718f66221713a77073c41291cc3abbfcd03aa4955e9b2b50dbf7f9b\
               6672dad0d46ade61e382f79888a73ea7899d9419becf1d6c9ec2087c1188fa18",
        );
        assert_eq!(
            key.address().to_string(),
            "0xC49926C4124cEe1cbA0Ea94Ea31a6c12318df947",
        );
        assert_eq!(address_from_public(&public_from_private(&key)), key.address());
    }

    #[test]
    fn hex_encoding() {
        let hex = "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";
        let key = hex.parse::<PrivateKey>().unwrap();
        assert_eq!(key.to_hex().as_str(), hex);
        assert_eq!(key.to_hex().len(), 66);

        let unprefixed = hex[2..].to_uppercase().parse::<PrivateKey>().unwrap();
        assert_eq!(unprefixed, key);
    }

    #[test]
    fn rejects_invalid_private_keys() {
        assert!(matches!(
            "0x1234".parse::<PrivateKey>(),
            Err(KeyError::InvalidLength(2))
        ));
        assert!(matches!(
            "0xgg".parse::<PrivateKey>(),
            Err(KeyError::Hex(_))
        ));
        assert!(matches!(PrivateKey::new([0; 32]), Err(KeyError::ZeroKey)));
        assert!(matches!(
            PrivateKey::new([0xff; 32]),
            Err(KeyError::TooLarge)
        ));
    }

    #[test]
    fn debug_output_only_shows_address() {
        let key = PrivateKey::new(testvectors::GANACHE_PRIVATE_KEY).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.starts_with("PrivateKey("));
        assert!(!debug.to_lowercase().contains("4f3edf983ac636a6"));
    }

    #[test]
    fn generated_keypairs_are_consistent() {
        let keypair = Keypair::generate(&KeyPolicy::default()).unwrap();
        assert_eq!(keypair.public, keypair.private.public());
        assert_eq!(keypair.address, keypair.private.address());
        assert!(validate_secret_key(&keypair.private, &KeyPolicy::default()).is_ok());
    }
}
