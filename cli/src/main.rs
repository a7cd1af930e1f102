//! Turnstile binary entry point.
//!
//! Diagrams go to stdout; logs go to stderr, filtered by `TURNSTILE_LOG`
//! (default `warn`).

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use turnstile::Cli;

const LOG_ENV: &str = "TURNSTILE_LOG";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    turnstile::run(&cli, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
