//! Module implementing the `address` subcommand for displaying the public
//! address for corresponding account.

use crate::cmd::KeyOptions;
use anyhow::Result;
use clap::Parser;
use hdwallet::Config;

#[derive(Debug, Parser)]
pub struct Options {
    #[command(flatten)]
    key: KeyOptions,
}

pub fn run(options: Options, config: &Config) -> Result<()> {
    println!("{}", options.key.keypair(config)?.address);
    Ok(())
}
