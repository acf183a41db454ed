//! Module implementing the `validate-path` subcommand for checking derivation
//! paths against the configured policy.

use anyhow::{Context as _, Result};
use clap::Parser;
use hdwallet::Config;

#[derive(Debug, Parser)]
pub struct Options {
    /// The BIP-0032 derivation path, for example `m/44'/60'/0'/0/0`.
    path: String,
}

pub fn run(options: Options, config: &Config) -> Result<()> {
    let path = config
        .path
        .parse(&options.path)
        .with_context(|| format!("invalid derivation path '{}'", options.path))?;
    println!("{path}");
    Ok(())
}
