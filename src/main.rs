use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use slip39::Wordlist;
use slip39::cli::{Cli, Commands};
use slip39::commands::{SplitOptions, combine_shares, inspect_share, split_secret};
use slip39::domain::{Group, ShareCount, SplitConfig};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read one secret line from stdin (hidden input when TTY available)
fn read_secret_line(prompt: &str) -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("{prompt}");
        let line = Zeroizing::new(rpassword::read_password().context("Failed to read from stdin")?);
        Ok(Zeroizing::new(line.trim().to_string()))
    } else {
        let mut line = Zeroizing::new(String::new());
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(Zeroizing::new(line.trim().to_string()))
    }
}

/// Read shares from stdin, one per line, until an empty line
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter SLIP-39 shares (one per line, empty line to finish):");

        loop {
            let share = Zeroizing::new(
                rpassword::read_password().context("Failed to read share from stdin")?,
            );
            if share.trim().is_empty() {
                break;
            }
            shares.push(share.trim().to_string());
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = Zeroizing::new(line.context("Failed to read line from stdin")?);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }
            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        bail!("No shares provided");
    }

    Ok(shares)
}

fn read_passphrase(requested: bool) -> Result<Zeroizing<String>> {
    if !requested {
        return Ok(Zeroizing::new(String::new()));
    }
    if atty::is(atty::Stream::Stdin) {
        let passphrase =
            rpassword::prompt_password("Passphrase: ").context("Failed to read passphrase")?;
        Ok(Zeroizing::new(passphrase))
    } else {
        read_secret_line("Passphrase:")
    }
}

fn load_wordlist(cli: &Cli) -> Result<Wordlist> {
    let Some(path) = &cli.wordlist else {
        bail!("No word list given: pass --wordlist PATH or set SLIP39_WORDLIST");
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    Wordlist::parse(&text).with_context(|| format!("Invalid word list {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let wordlist = load_wordlist(&cli)?;

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            iteration_exponent,
            passphrase,
            group_name,
        } => {
            let secret = read_secret_line("Enter master secret (hex):")?;
            let passphrase = read_passphrase(passphrase)?;

            let share_count = ShareCount::new(shares)?;
            let config = SplitConfig::new(threshold, share_count)?;
            let group = Group::with_config(group_name.as_deref(), config);
            eprintln!("{group}");

            let options = SplitOptions::new(group, iteration_exponent);
            for share in split_secret(&secret, &options, &passphrase, &wordlist)? {
                println!("{share}");
            }
        }
        Commands::Combine { passphrase } => {
            let shares = read_shares()?;
            let passphrase = read_passphrase(passphrase)?;
            let secret = combine_shares(&shares, &passphrase, &wordlist)?;
            println!("{}", secret.as_str());
        }
        Commands::Inspect => {
            let share = read_secret_line("Enter share:")?;
            println!("{}", inspect_share(&share, &wordlist)?);
        }
    }

    Ok(())
}
