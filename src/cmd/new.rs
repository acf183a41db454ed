//! Module implementing the `new` subcommand for generating a mnemonic for a new
//! hierarchical deterministic wallet.

use anyhow::{Context as _, Result};
use clap::Parser;
use hdwallet::{
    entropy::EntropyError,
    mnemonic::{Language, Mnemonic},
};

/// The maximum number of entropy draws rejected by the quality gate before
/// giving up.
const MAX_ATTEMPTS: usize = 16;

#[derive(Debug, Parser)]
pub struct Options {
    /// The number of words for the mnemonic phrase.
    #[arg(short = 'n', long, default_value_t = 12)]
    length: usize,

    /// The language to generate the mnemonic for.
    #[arg(short, long, default_value_t)]
    language: Language,
}

pub fn run(options: Options) -> Result<()> {
    let mut attempts = 0;
    let mnemonic = loop {
        attempts += 1;
        let mnemonic = Mnemonic::random(options.language, options.length)?;
        match mnemonic.entropy().validate() {
            Ok(()) => break mnemonic,
            Err(err @ EntropyError::PoorQuality(_)) if attempts < MAX_ATTEMPTS => {
                tracing::warn!(attempts, %err, "rejected generated entropy");
            }
            Err(err) => {
                return Err(err).context("system randomness failed the entropy quality gate")
            }
        }
    };

    println!("{mnemonic}");
    Ok(())
}
