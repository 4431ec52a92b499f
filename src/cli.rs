use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{IterationExponent, Threshold};

fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

fn validate_iteration_exponent(s: &str) -> Result<IterationExponent, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    IterationExponent::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "slip39")]
#[command(about = "Split a master secret into SLIP-39 mnemonic shares and combine them back")]
pub struct Cli {
    /// Word list file with the 1024 mnemonic words, one per line
    #[arg(short, long, global = true, env = "SLIP39_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a hex master secret into shares
    Split {
        /// Number of shares to create (1-16)
        #[arg(short, long)]
        shares: u8,

        /// Minimum number of shares needed to reconstruct (1-16)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// PBKDF2 cost exponent: each cipher round runs 2500 << E iterations
        #[arg(short = 'e', long, default_value = "0", value_parser = validate_iteration_exponent)]
        iteration_exponent: IterationExponent,

        /// Prompt for a passphrase to encrypt the master secret
        #[arg(short, long)]
        passphrase: bool,

        /// Label for the share group
        #[arg(short, long)]
        group_name: Option<String>,
    },
    /// Combine shares to reconstruct the master secret
    Combine {
        /// Prompt for the passphrase used when splitting
        #[arg(short, long)]
        passphrase: bool,
    },
    /// Print the metadata of a share without recovering anything
    Inspect,
}
