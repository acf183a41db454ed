#![allow(dead_code)]

#[path = "../../src/testvectors.rs"]
mod testvectors;

pub use testvectors::*;
use std::{process::Command, str};

/// Utility type for building an `hdwallet` command for integration tests.
pub struct Hdwallet {
    command: Command,
}

impl Hdwallet {
    /// Create a new `hdwallet` command builder.
    pub fn new(subcommand: &str, args: &[&str]) -> Self {
        let mut command = Command::new("cargo");
        command.env("MNEMONIC", testvectors::GANACHE_MNEMONIC);
        for key in [
            "PASSPHRASE",
            "SEED",
            "ACCOUNT_INDEX",
            "HD_PATH",
            "PRIVATE_KEY",
            "ENTROPY",
            "HDWALLET_CONFIG",
            "RUST_LOG",
        ] {
            command.env_remove(key);
        }
        command
            .args(["run", "--quiet", "--", subcommand])
            .args(args);
        Self { command }
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    /// Executes the command and returns the standard output on success and
    /// standard error on failure.
    pub fn execute(mut self) -> Result<String, String> {
        let output = self.command.output().unwrap();
        if output.status.success() {
            Ok(string_from_utf8(output.stdout))
        } else {
            Err(string_from_utf8(output.stderr))
        }
    }
}

/// Builds and executes an `hdwallet` command, panicking on failure.
pub fn exec(subcommand: &str, args: &[&str]) -> String {
    try_exec(subcommand, args).unwrap()
}

/// Builds and executes an `hdwallet` command.
pub fn try_exec(subcommand: &str, args: &[&str]) -> Result<String, String> {
    Hdwallet::new(subcommand, args).execute()
}

fn string_from_utf8(bytes: Vec<u8>) -> String {
    str::from_utf8(&bytes).unwrap().trim().to_string()
}
