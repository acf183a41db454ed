//! Module implementing various hashing utilities.

use hmac::{Hmac, Mac as _};
use ripemd::Ripemd160;
use sha2::{Digest as _, Sha256, Sha512};
use sha3::Keccak256;
use zeroize::Zeroizing;

/// Returns the Keccak-256 hash of the specified input.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// Returns the SHA256 hash of the specified input.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// Returns the Bitcoin `HASH160` of the specified input, that is the
/// RIPEMD-160 hash of its SHA256 hash.
pub fn hash160(data: impl AsRef<[u8]>) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    hasher.finalize().into()
}

/// Computes an HMAC-SHA512 over the concatenation of `parts`.
///
/// The output typically contains secret key material, so it is returned in a
/// buffer that is cleared once dropped.
pub fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Zeroizing<[u8; 64]> {
    let mut hmac =
        Hmac::<Sha512>::new_from_slice(key).expect("HMAC can take a key of any size");
    for part in parts {
        hmac.update(part);
    }

    let mut output = Zeroizing::new([0u8; 64]);
    output.copy_from_slice(&hmac.finalize().into_bytes());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn empty_digests() {
        assert_eq!(
            keccak256([]),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"),
        );
        assert_eq!(
            sha256([]),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        );
        assert_eq!(hash160([]), hex!("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"));
    }

    #[test]
    fn hmac_concatenates_parts() {
        assert_eq!(
            *hmac_sha512(b"Bitcoin seed", &[b"hello ", b"world"]),
            *hmac_sha512(b"Bitcoin seed", &[b"hello world"]),
        );
    }
}
