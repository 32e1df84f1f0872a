//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;
use kindred::config::DEFAULT_CONFIG_FILE;

/// Kindred - family tree shell
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(version)]
#[command(about = "Build, query, merge and render family trees")]
#[command(
    long_about = "Kindred reads commands from standard input, one per line. Type 'help' in the session for the command list."
)]
pub struct Cli {
    /// Tree file to open before reading commands
    pub file: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Seed for node colors (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,
}
