//! Module implementing the `public-key` subcommand for displaying the public
//! key for corresponding account.

use crate::cmd::KeyOptions;
use anyhow::Result;
use clap::Parser;
use hdwallet::{encoding, Config};

#[derive(Debug, Parser)]
pub struct Options {
    #[command(flatten)]
    key: KeyOptions,

    /// Print the 33-byte SEC1 compressed encoding instead.
    #[arg(long)]
    compressed: bool,
}

pub fn run(options: Options, config: &Config) -> Result<()> {
    let public = options.key.keypair(config)?.public;
    if options.compressed {
        println!("{}", encoding::encode_prefixed(public.encode_compressed()));
    } else {
        println!("{public}");
    }
    Ok(())
}
