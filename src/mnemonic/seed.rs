//! The binary seed stretched from a mnemonic phrase.

use crate::encoding::{self, HexError};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 64-byte BIP-0039 seed, the root input to BIP-0032 key derivation.
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(pub(super) [u8; 64]);

impl Seed {
    /// The length of a seed in bytes.
    pub const LEN: usize = 64;

    /// Creates a seed from its raw bytes.
    pub fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Returns the seed bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Seed {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Formats the seed as 128 lowercase hexadecimal characters without a prefix.
impl Display for Seed {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut buf = [0u8; 128];
        hex::encode_to_slice(self.0, &mut buf).map_err(|_| fmt::Error)?;
        let result = f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?);
        buf.zeroize();
        result
    }
}

impl FromStr for Seed {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encoding::decode_array(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let hex = "15e7bbc6ac54a721ad440f8ef7d1fa7c4f77ae5ec71e24187649e9d228022655\
                   b9e6fb3659f8e4b2274ac3b1955bf9e58f150492c44e7aa161095ba0ad926e9e";
        let seed = hex.parse::<Seed>().unwrap();
        assert_eq!(seed.to_string(), hex);
        assert_eq!(seed.to_string().len(), 128);

        let upper = format!("0x{}", hex.to_uppercase());
        assert_eq!(upper.parse::<Seed>().unwrap(), seed);
    }

    #[test]
    fn rejects_short_seeds() {
        assert!(matches!(
            "00112233".parse::<Seed>(),
            Err(HexError::InvalidLength {
                expected: 64,
                actual: 4
            }),
        ));
    }

    #[test]
    fn debug_output_redacts_bytes() {
        assert_eq!(format!("{:?}", Seed::new([0xff; 64])), "Seed(..)");
    }
}
