mod cmd;

use crate::cmd::*;
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use hdwallet::Config;
use std::{io, path::PathBuf, process};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Hierarchical deterministic wallet for Ethereum.
#[derive(Debug, Parser)]
#[command(name = "hdwallet", version, about)]
struct Options {
    /// Path to a TOML configuration file with path, key and batch policies.
    #[arg(long, global = true, env = "HDWALLET_CONFIG")]
    config: Option<PathBuf>,

    /// Log level to use when `RUST_LOG` is not set. Logs are written to
    /// standard error.
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a random mnemonic for a new wallet.
    New(new::Options),
    /// Encode hex entropy, or the master key of a seed, as a mnemonic.
    Mnemonic(mnemonic::Options),
    /// Print the hex seed for a mnemonic.
    Seed(seed::Options),
    /// Derive an account, printed as `address:privatekey`.
    Derive(derive::Options),
    /// Print the address of an account.
    Address(address::Options),
    /// Print the public key of an account.
    PublicKey(public_key::Options),
    /// Generate random keypairs, printed as `address:privatekey`.
    Generate(generate::Options),
    /// Check a derivation path against the path policy.
    ValidatePath(validate_path::Options),
}

fn main() {
    let options = Options::parse();
    init_tracing(options.log_level);

    if let Err(err) = run(options) {
        if cfg!(debug_assertions) {
            eprintln!("ERROR: {:?}", err);
        } else {
            eprintln!("ERROR: {}", err);
        }
        process::exit(-1);
    }
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(options: Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display()))?,
        None => Config::default(),
    };

    match options.command {
        Command::New(options) => new::run(options),
        Command::Mnemonic(options) => mnemonic::run(options),
        Command::Seed(options) => seed::run(options),
        Command::Derive(options) => derive::run(options, &config),
        Command::Address(options) => address::run(options, &config),
        Command::PublicKey(options) => public_key::run(options, &config),
        Command::Generate(options) => generate::run(options, &config),
        Command::ValidatePath(options) => validate_path::run(options, &config),
    }
}
