//! Module implementing the `seed` subcommand for printing the BIP-0039 seed of
//! a mnemonic phrase.

use anyhow::Result;
use clap::Parser;
use hdwallet::mnemonic::Mnemonic;

#[derive(Debug, Parser)]
pub struct Options {
    /// The BIP-0039 mnemonic phrase.
    #[arg(short, long, env, hide_env_values = true)]
    mnemonic: Mnemonic,

    /// The optional BIP-0039 passphrase.
    #[arg(long, env, hide_env_values = true, default_value = "")]
    passphrase: String,
}

pub fn run(options: Options) -> Result<()> {
    println!("{}", options.mnemonic.seed(&options.passphrase));
    Ok(())
}
