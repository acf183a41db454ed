//! Policies consulted by the key derivation pipeline, loadable from TOML.

use crate::{account::KeyPolicy, hdk::DerivationScheme, hdk::PathPolicy};
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

/// The default maximum number of keypairs generated in a single batch.
pub const DEFAULT_BATCH_LIMIT: usize = 1000;

/// Errors loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file")]
    Io(#[from] io::Error),
    #[error("invalid configuration")]
    Toml(#[from] toml::de::Error),
}

/// Wallet configuration.
///
/// Every section is optional, missing values take their defaults:
///
/// ```toml
/// batch-limit = 1000
/// derivation = "standard"
///
/// [path]
/// max-depth = 10
/// purposes = [44, 49, 84]
///
/// [key]
/// min-private-key = 1000
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Derivation path policy.
    pub path: PathPolicy,
    /// Private key policy.
    pub key: KeyPolicy,
    /// Encoding of parent keys in hardened derivation.
    pub derivation: DerivationScheme,
    /// Maximum number of keypairs generated in one batch.
    pub batch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathPolicy::default(),
            key: KeyPolicy::default(),
            derivation: DerivationScheme::default(),
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }
}

impl Config {
    /// Parses a configuration from a TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Reads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml(&fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
