//! slotfs entry point.
//!
//! ```bash
//! slotfs -c 'ls /etc' -c 'cat /etc/motd'
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use slotfs_cli::Cli;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with command output (RUST_LOG).
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let code = slotfs_cli::run(&cli)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
