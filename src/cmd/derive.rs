//! Module implementing the `derive` subcommand for deriving an account from a
//! wallet seed.

use crate::cmd::AccountOptions;
use anyhow::Result;
use clap::Parser;
use hdwallet::Config;

#[derive(Debug, Parser)]
pub struct Options {
    #[command(flatten)]
    account: AccountOptions,
}

pub fn run(options: Options, config: &Config) -> Result<()> {
    let keypair = options.account.keypair(config)?;
    println!(
        "{}:{}",
        keypair.address,
        keypair.private.to_hex().as_str()
    );
    Ok(())
}
