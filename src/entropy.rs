//! Root entropy for BIP-0039 mnemonics and the heuristic quality gate applied
//! to it.
//!
//! The quality checks are a safety net against a catastrophically broken
//! random number generator (stuck at zero, or heavily biased). Passing them
//! says nothing about how unpredictable the entropy actually is.

use crate::rand;
use std::{
    fmt::{self, Debug, Formatter},
    io,
};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The minimum entropy length in bits accepted by the quality gate.
pub const MIN_ENTROPY_BITS: usize = 128;

/// The supported entropy lengths in bytes.
pub const SUPPORTED_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// The inclusive range of the fraction of set bits considered plausible for
/// random entropy.
const HAMMING_RATIO: (f64, f64) = (0.40, 0.60);

/// An error with entropy generation or validation.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("unsupported entropy length of {0} bits")]
    UnsupportedLength(usize),
    #[error("entropy is too short: got {0} bits, need at least {MIN_ENTROPY_BITS}")]
    TooShort(usize),
    #[error("entropy is all zeros")]
    AllZeros,
    #[error("entropy has poor quality: {:.2}% of bits set (expected 40-60%)", .0 * 100.0)]
    PoorQuality(f64),
    #[error("failed to read entropy from the operating system")]
    Rng(#[from] io::Error),
}

/// Raw entropy of one of the supported BIP-0039 lengths.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    buf: [u8; 32],
    len: usize,
}

impl Entropy {
    /// Draws `bits` of cryptographically secure entropy from the operating
    /// system.
    ///
    /// The entropy is **not** run through [`validate_entropy`], that decision
    /// is left to the caller.
    pub fn generate(bits: usize) -> Result<Self, EntropyError> {
        let len = supported_length(bits)?;

        let mut entropy = Self { buf: [0; 32], len };
        rand::get_entropy(&mut entropy.buf[..len])?;

        tracing::debug!(bits, "generated entropy");
        Ok(entropy)
    }

    /// Wraps existing entropy bytes.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, EntropyError> {
        let bytes = bytes.as_ref();
        let len = supported_length(bytes.len() * 8)?;

        let mut entropy = Self { buf: [0; 32], len };
        entropy.buf[..len].copy_from_slice(bytes);
        Ok(entropy)
    }

    /// Returns the entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the entropy length in bits.
    pub fn bits(&self) -> usize {
        self.len * 8
    }

    /// Runs the quality gate over this entropy.
    pub fn validate(&self) -> Result<(), EntropyError> {
        validate_entropy(self.as_bytes())
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Entropy {}

impl Debug for Entropy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

/// Generates entropy with the specified bit length.
pub fn generate_entropy(bits: usize) -> Result<Entropy, EntropyError> {
    Entropy::generate(bits)
}

/// Checks entropy for minimum length, the all-zero pattern and a plausible
/// Hamming weight, in that order.
pub fn validate_entropy(entropy: &[u8]) -> Result<(), EntropyError> {
    let bits = entropy.len() * 8;
    if bits < MIN_ENTROPY_BITS {
        return Err(EntropyError::TooShort(bits));
    }
    if entropy.iter().all(|&byte| byte == 0) {
        return Err(EntropyError::AllZeros);
    }

    let ones = entropy
        .iter()
        .map(|byte| byte.count_ones() as usize)
        .sum::<usize>();
    let ratio = ones as f64 / bits as f64;
    if !(HAMMING_RATIO.0..=HAMMING_RATIO.1).contains(&ratio) {
        return Err(EntropyError::PoorQuality(ratio));
    }

    Ok(())
}

fn supported_length(bits: usize) -> Result<usize, EntropyError> {
    if bits % 8 != 0 || !SUPPORTED_LENGTHS.contains(&(bits / 8)) {
        return Err(EntropyError::UnsupportedLength(bits));
    }
    Ok(bits / 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_supported_lengths() {
        for bits in [128, 160, 192, 224, 256] {
            let entropy = Entropy::generate(bits).unwrap();
            assert_eq!(entropy.as_bytes().len() * 8, bits);
            assert!(entropy.as_bytes().iter().any(|&byte| byte != 0));
        }
    }

    #[test]
    fn rejects_unsupported_lengths() {
        for bits in [0, 64, 129, 136, 512] {
            assert!(matches!(
                Entropy::generate(bits),
                Err(EntropyError::UnsupportedLength(b)) if b == bits,
            ));
        }
        assert!(Entropy::new([0xaa; 17]).is_err());
    }

    #[test]
    fn quality_gate() {
        assert!(validate_entropy(&[0xaa; 16]).is_ok());
        assert!(validate_entropy(&[0x55; 32]).is_ok());
        assert!(matches!(
            validate_entropy(&[0x00; 16]),
            Err(EntropyError::AllZeros),
        ));
        assert!(matches!(
            validate_entropy(&[0xff; 16]),
            Err(EntropyError::PoorQuality(ratio)) if ratio == 1.,
        ));
        assert!(matches!(
            validate_entropy(&[0xaa; 8]),
            Err(EntropyError::TooShort(64)),
        ));
        assert!(matches!(validate_entropy(&[]), Err(EntropyError::TooShort(0))));
    }

    #[test]
    fn hamming_weight_bounds_are_inclusive() {
        // 0x0f has 4 set bits, 0x07 has 3: 52 of 128 bits is just above 40%.
        let mut entropy = [0x07; 16];
        entropy[..4].fill(0x0f);
        assert!(validate_entropy(&entropy).is_ok());

        // 51 of 128 bits is just below.
        entropy[0] = 0x07;
        assert!(matches!(
            validate_entropy(&entropy),
            Err(EntropyError::PoorQuality(_)),
        ));

        // At 160 bits, 64 and 96 set bits are exactly 40% and 60%.
        let with_ones = |ones: usize| {
            let mut entropy = [0_u8; 20];
            entropy[..ones / 8].fill(0xff);
            if ones % 8 != 0 {
                entropy[ones / 8] = 0xff << (8 - ones % 8);
            }
            entropy
        };
        assert!(validate_entropy(&with_ones(64)).is_ok());
        assert!(validate_entropy(&with_ones(96)).is_ok());
        for ones in [63, 97] {
            assert!(matches!(
                validate_entropy(&with_ones(ones)),
                Err(EntropyError::PoorQuality(_)),
            ));
        }
    }

    #[test]
    fn debug_output_redacts_bytes() {
        let entropy = Entropy::new([0xaa; 16]).unwrap();
        assert_eq!(format!("{entropy:?}"), "Entropy { bits: 128, .. }");
    }
}
