//! Hexadecimal text encoding used at the crate boundary.
//!
//! Input is permissive: an optional `0x` prefix and either letter case are
//! accepted. Output is always lowercase and `0x`-prefixed unless noted.

use thiserror::Error;

/// An error decoding hexadecimal input.
#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    #[error("invalid hex string: {0}")]
    Invalid(#[from] hex::FromHexError),
    #[error("expected {expected} bytes of hex data but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Decodes a hexadecimal string with an optional `0x` prefix.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(s)?)
}

/// Decodes a hexadecimal string into a fixed size byte array.
pub fn decode_array<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let bytes = decode(s)?;
    bytes.as_slice().try_into().map_err(|_| HexError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// Encodes bytes as a `0x`-prefixed lowercase hexadecimal string.
pub fn encode_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_optional_prefix_and_any_case() {
        for input in ["0xdeadBEEF", "0XDEADbeef", "deadbeef", " 0xdeadbeef\n"] {
            assert_eq!(decode(input).unwrap(), [0xde, 0xad, 0xbe, 0xef]);
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(decode("0xabc"), Err(HexError::Invalid(_))));
        assert!(matches!(decode("zz"), Err(HexError::Invalid(_))));
        assert_eq!(
            decode_array::<4>("0x0102"),
            Err(HexError::InvalidLength {
                expected: 4,
                actual: 2
            }),
        );
    }

    #[test]
    fn encodes_lowercase_with_prefix() {
        assert_eq!(encode_prefixed([0xAB, 0x01]), "0xab01");
    }
}
