//! Crate level error spanning the stages of the key derivation pipeline.

use crate::{
    account::KeyError, config::ConfigError, encoding::HexError, entropy::EntropyError,
    hdk::{DerivationError, PathError},
    mnemonic::MnemonicError,
};
use thiserror::Error;

/// An error from any stage of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Derivation(#[from] DerivationError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Hex(#[from] HexError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
