//! Module containing subcommands.

pub mod address;
pub mod derive;
pub mod generate;
pub mod mnemonic;
pub mod new;
pub mod public_key;
pub mod seed;
pub mod validate_path;

use anyhow::{Context as _, Result};
use clap::Args;
use hdwallet::{
    account::{self, Keypair, PrivateKey},
    hdk::{self, Path},
    mnemonic::{Mnemonic, Seed},
    Config,
};

/// Options for the wallet seed, either as a mnemonic or as raw hex.
#[derive(Debug, Args)]
pub struct SeedOptions {
    /// The BIP-0039 mnemonic phrase for seeding the HD wallet.
    #[arg(short, long, env, hide_env_values = true)]
    mnemonic: Option<Mnemonic>,

    /// The optional BIP-0039 passphrase used with the mnemonic.
    #[arg(long, env, hide_env_values = true, default_value = "")]
    passphrase: String,

    /// The hex-encoded 64-byte BIP-0039 seed. Takes precedence over the
    /// mnemonic.
    #[arg(long, env, hide_env_values = true)]
    seed: Option<Seed>,
}

impl SeedOptions {
    /// Returns the seed for the options.
    pub fn seed(&self) -> Result<Seed> {
        match (&self.seed, &self.mnemonic) {
            (Some(seed), _) => Ok(seed.clone()),
            (None, Some(mnemonic)) => Ok(mnemonic.seed(&self.passphrase)),
            (None, None) => anyhow::bail!("a mnemonic or a seed is required"),
        }
    }
}

/// Shared account options.
#[derive(Debug, Args)]
pub struct AccountOptions {
    #[command(flatten)]
    seed: SeedOptions,

    /// The BIP-0044 account index for deriving a private key along the
    /// default Ethereum path `m/44'/60'/0'/0/<index>`.
    #[arg(
        long,
        env,
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..0x8000_0000),
    )]
    account_index: u32,

    /// An explicit BIP-0032 derivation path, overriding the account index.
    #[arg(long, env = "HD_PATH")]
    path: Option<String>,
}

impl AccountOptions {
    /// Returns the derivation path for the specified account options.
    pub fn path(&self, config: &Config) -> Result<Path> {
        match &self.path {
            Some(path) => config
                .path
                .parse(path)
                .with_context(|| format!("invalid derivation path '{path}'")),
            None => Ok(Path::for_index(self.account_index)?),
        }
    }

    /// Returns the keypair for the specified account options.
    pub fn keypair(&self, config: &Config) -> Result<Keypair> {
        let seed = self.seed.seed()?;
        let path = self.path(config)?;
        let keypair = hdk::derive_account(&seed, &path, config)
            .with_context(|| format!("failed to derive account at '{path}'"))?;
        Ok(keypair)
    }
}

/// Options for an account given either by a raw private key or by derivation
/// from a seed.
#[derive(Debug, Args)]
pub struct KeyOptions {
    /// The hex-encoded private key, instead of deriving one from a seed.
    #[arg(long, env, hide_env_values = true)]
    private_key: Option<PrivateKey>,

    #[command(flatten)]
    account: AccountOptions,
}

impl KeyOptions {
    /// Returns the keypair for the specified key options.
    pub fn keypair(&self, config: &Config) -> Result<Keypair> {
        match &self.private_key {
            Some(key) => {
                account::validate_secret_key(key, &config.key)?;
                Ok(Keypair::from(key.clone()))
            }
            None => self.account.keypair(config),
        }
    }
}
