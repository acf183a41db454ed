//! Range and strength checks for raw private key scalars.
//!
//! The minimum value floor is a heuristic guard against degenerate key
//! generators. It is not a cryptographic requirement and does not replace a
//! correct random number generator.

use crate::account::{KeyError, PrivateKey};
use ethnum::U256;
use serde::Deserialize;

/// The order `n` of the secp256k1 curve.
pub const CURVE_ORDER: U256 = U256::from_words(
    0xfffffffffffffffffffffffffffffffe,
    0xbaaedce6af48a03bbfd25e8cd0364141,
);

/// The default minimum acceptable private key value.
pub const DEFAULT_MIN_PRIVATE_KEY: u64 = 1000;

/// Policy for accepting private key scalars.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct KeyPolicy {
    /// Private keys smaller than this value are rejected as weak.
    pub min_private_key: u64,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            min_private_key: DEFAULT_MIN_PRIVATE_KEY,
        }
    }
}

impl KeyPolicy {
    /// Validates a big-endian encoded private key scalar against this policy.
    pub fn validate(&self, secret: &[u8]) -> Result<(), KeyError> {
        validate_private_key(secret, self)
    }
}

/// Validates a big-endian encoded private key scalar.
///
/// Checks are applied in order: the key must be present, non-zero, at least
/// the policy's minimum and strictly less than the curve order.
pub fn validate_private_key(secret: &[u8], policy: &KeyPolicy) -> Result<(), KeyError> {
    if secret.is_empty() {
        return Err(KeyError::NilKey);
    }

    let start = secret
        .iter()
        .position(|&byte| byte != 0)
        .ok_or(KeyError::ZeroKey)?;
    let significant = &secret[start..];
    if significant.len() > 32 {
        return Err(KeyError::TooLarge);
    }

    let mut bytes = [0u8; 32];
    bytes[32 - significant.len()..].copy_from_slice(significant);
    let value = U256::from_be_bytes(bytes);

    if value < U256::from(policy.min_private_key) {
        return Err(KeyError::TooSmall(policy.min_private_key));
    }
    if value >= CURVE_ORDER {
        return Err(KeyError::TooLarge);
    }

    Ok(())
}

/// Validates an already constructed private key against a policy.
///
/// Constructed keys are always in range, so this can only fail the minimum
/// value check.
pub fn validate_secret_key(key: &PrivateKey, policy: &KeyPolicy) -> Result<(), KeyError> {
    validate_private_key(&*key.secret(), policy)
}
