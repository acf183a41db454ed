//! Module implementing the `generate` subcommand for generating random
//! keypairs.

use anyhow::Result;
use clap::Parser;
use hdwallet::{account, Config};

#[derive(Debug, Parser)]
pub struct Options {
    /// The number of keypairs to generate, capped by the configured batch
    /// limit.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

pub fn run(options: Options, config: &Config) -> Result<()> {
    for keypair in account::generate_keypairs(options.count, config)? {
        println!(
            "{}:{}",
            keypair.address,
            keypair.private.to_hex().as_str()
        );
    }
    Ok(())
}
