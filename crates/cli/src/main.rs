//! `hexseal` — command-line entry point.
//!
//! Startup sequence:
//! 1. Parse arguments.
//! 2. Load and validate [`config::Config`] from the optional file and environment.
//! 3. Initialise structured logging on stderr.
//! 4. Run the subcommand and print its result to stdout.

mod commands;
mod config;
mod telemetry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use codec::AeadFramedCodec;

#[derive(Parser)]
#[command(
    name = "hexseal",
    version,
    about = "Encrypt and decrypt hexseal blobs",
    long_about = "Encrypts text into self-describing hex blobs (AES-128-GCM) and back. \
                  The key is read from HEXSEAL_KEY or from the config file."
)]
struct Cli {
    /// TOML config file; HEXSEAL_* environment variables take precedence
    #[arg(long, env = "HEXSEAL_CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::Config::load(cli.config.as_deref()).map_err(|e| {
        eprintln!("ERROR: hexseal configuration invalid: {e:#}");
        e
    })?;

    telemetry::init(&cfg.log_level)?;

    let codec = AeadFramedCodec::new(&cfg.key).context("HEXSEAL_KEY is not valid hex")?;
    let output = commands::run(cli.command, &codec, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}
