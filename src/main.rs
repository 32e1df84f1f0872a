//! # Kindred - interactive family tree shell
//!
//! ## Start-up
//!
//! 1. **Tracing** - `RUST_LOG` filter, `warn` by default, written to stderr
//! 2. **Config** - `kindred.toml` (or `--config`); a broken file is logged
//!    and replaced by defaults
//! 3. **Session** - opens the optional start file, then reads commands from
//!    stdin until `exit` or end of input

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use kindred::config::Config;
use kindred::session::Session;
use kindred_core::ResultExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(&cli.config).or_default_logged(Config::default());

    let rng = match cli.seed.or(config.seed) {
        Some(seed) => {
            info!(seed, "Seeding colors");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(config.canvas, rng);
    if let Some(path) = &cli.file {
        session
            .open(path)
            .with_context(|| format!("Failed to open start file {}", path.display()))?;
    }

    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Session aborted")?;
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
