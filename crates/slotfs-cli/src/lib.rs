//! slotfs command-line front end.
//!
//! Runs command lines against a freshly booted kernel: from `-c`, from a
//! script file, or from stdin. Lines starting with `#` are comments.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use slotfs_kernel::{ExecResult, Kernel, KernelConfig};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "slotfs", version, about = "A flat, fixed-capacity in-memory file store")]
pub struct Cli {
    /// Configuration file (defaults to $SLOTFS_CONFIG, then the XDG config dir).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from an empty table instead of the standard layout.
    #[arg(long)]
    pub no_bootstrap: bool,

    /// Command to run; may be repeated. Runs before SCRIPT.
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Print one JSON object per command instead of plain output.
    #[arg(long)]
    pub json: bool,

    /// Script of commands, one per line.
    pub script: Option<PathBuf>,
}

impl Cli {
    /// Load the configuration selected by the flags.
    pub fn kernel_config(&self) -> Result<KernelConfig> {
        let mut config = match &self.config {
            Some(path) => KernelConfig::load_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => KernelConfig::load().context("failed to load config")?,
        };
        if self.no_bootstrap {
            config.bootstrap = false;
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct Record<'a> {
    command: &'a str,
    #[serde(flatten)]
    result: &'a ExecResult,
}

/// Run everything the flags ask for. Returns the exit code of the last
/// failing command, or 0.
pub fn run(cli: &Cli) -> Result<i64> {
    let config = cli.kernel_config()?;
    let mut kernel = Kernel::new(config).context("failed to start kernel")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if cli.commands.is_empty() && cli.script.is_none() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read stdin")?;
        return run_lines(&mut kernel, lines.iter().map(String::as_str), &mut out, &mut err, cli.json)
            .context("failed to write output");
    }

    let mut code = run_lines(
        &mut kernel,
        cli.commands.iter().map(String::as_str),
        &mut out,
        &mut err,
        cli.json,
    )
    .context("failed to write output")?;

    if let Some(path) = &cli.script {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        debug!(script = %path.display(), "running script");
        let script_code = run_lines(&mut kernel, source.lines(), &mut out, &mut err, cli.json)
            .context("failed to write output")?;
        if script_code != 0 {
            code = script_code;
        }
    }
    Ok(code)
}

/// Execute `lines` in order, writing each result to `out` and `err`.
///
/// Blank lines and `#` comments are skipped. With `json`, each command
/// produces one JSON object on `out` and nothing on `err`.
pub fn run_lines<'a>(
    kernel: &mut Kernel,
    lines: impl IntoIterator<Item = &'a str>,
    out: &mut impl Write,
    err: &mut impl Write,
    json: bool,
) -> io::Result<i64> {
    let mut last_failure = 0;
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = kernel.execute(line);
        if json {
            serde_json::to_writer(&mut *out, &Record { command: line, result: &result })?;
            writeln!(out)?;
        } else {
            write_stream(out, &result.out)?;
            write_stream(err, &result.err)?;
        }
        if !result.ok() {
            last_failure = result.code;
        }
    }
    out.flush()?;
    Ok(last_failure)
}

fn write_stream(w: &mut impl Write, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    Ok(())
}
