//! Module implementing the `mnemonic` subcommand for encoding entropy, or the
//! master key of a seed, as a mnemonic phrase.

use anyhow::{Context as _, Result};
use clap::Parser;
use hdwallet::{
    encoding,
    entropy::{self, Entropy},
    hdk,
    mnemonic::{Language, Mnemonic},
};
use zeroize::Zeroizing;

#[derive(Debug, Parser)]
pub struct Options {
    /// The hex-encoded entropy: 16, 20, 24, 28 or 32 bytes.
    #[arg(long, env, hide_env_values = true)]
    entropy: Option<String>,

    /// A hex-encoded BIP-0032 seed of 16 to 64 bytes. The master private key
    /// derived from it is encoded as a 24-word mnemonic. Takes precedence
    /// over the entropy.
    #[arg(long)]
    seed: Option<String>,

    /// The language of the mnemonic phrase.
    #[arg(short, long, default_value_t)]
    language: Language,

    /// Skip the entropy quality checks. Only meant for reproducing known
    /// mnemonics from test vectors.
    #[arg(long)]
    allow_weak_entropy: bool,
}

pub fn run(options: Options) -> Result<()> {
    let mnemonic = match (&options.seed, &options.entropy) {
        (Some(seed), _) => {
            let seed = Zeroizing::new(encoding::decode(seed).context("invalid seed")?);
            hdk::master_mnemonic(&*seed, options.language)?
        }
        (None, Some(entropy)) => {
            let bytes = Zeroizing::new(encoding::decode(entropy).context("invalid entropy")?);
            if !options.allow_weak_entropy {
                entropy::validate_entropy(&bytes)?;
            }
            Mnemonic::from_entropy(options.language, Entropy::new(&*bytes)?)
        }
        (None, None) => anyhow::bail!("entropy or a seed is required"),
    };

    println!("{mnemonic}");
    Ok(())
}
