//! Ethereum hierarchically deterministic wallet.
//!
//! This crate implements generating and parsing BIP-0039 mnemonic phrases,
//! BIP-0032 key derivation along BIP-0044 paths, and Ethereum account keys
//! and addresses. Each stage comes with a validation gate: entropy quality,
//! derivation path policy and private key range.
//!
//! ```no_run
//! use hdwallet::{hdk, mnemonic::Mnemonic};
//!
//! let mnemonic = "myth like bonus scare over problem client lizard pioneer submit female collect"
//!     .parse::<Mnemonic>()?;
//! let path = hdk::validate_path("m/44'/60'/0'/0/0")?;
//! let account = hdk::derive(mnemonic.seed(""), &path)?;
//! println!("{}", account.address());
//! # Ok::<(), hdwallet::Error>(())
//! ```

pub mod account;
pub mod config;
pub mod encoding;
pub mod entropy;
mod error;
pub mod hash;
pub mod hdk;
pub mod mnemonic;
mod rand;

#[cfg(test)]
mod testvectors;

pub use self::{
    account::{
        address_from_public, generate_keypairs, public_from_private, validate_private_key,
        Address, KeyError, Keypair, PrivateKey, PublicKey,
    },
    config::Config,
    entropy::{generate_entropy, validate_entropy, Entropy, EntropyError},
    error::Error,
    hdk::{
        derive_child, master_from_seed, parse_path, validate_path, walk_path, DerivationError,
        ExtendedKey, Path, PathError,
    },
    mnemonic::{
        entropy_to_mnemonic, mnemonic_to_entropy, mnemonic_to_seed, Mnemonic, MnemonicError,
        Seed,
    },
};
