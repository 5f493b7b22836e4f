// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lf - append-only log with size-bounded rotation

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod env;
mod output;
mod settings;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{clear, gather, status, write};
use output::OutputFormat;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "lf",
    version,
    about = "Append-only log with size-bounded rotation"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Directory holding the log files (default: $LF_LOG_DIR, then the user cache dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Rotate once the current file reaches this many bytes (default: $LF_MAX_LOG_SIZE, then 100 MiB)
    #[arg(long, global = true)]
    max_size: Option<u64>,

    /// Prefix written records with a timestamp (also enabled by LF_TIMESTAMP=1)
    #[arg(long, global = true)]
    timestamp: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append lines to the log (reads stdin when no lines are given)
    Write(write::WriteArgs),
    /// Print the size of the current log file in bytes
    Size,
    /// Print the archived and current log, oldest first
    Gather,
    /// Write a standalone copy of the log and print its path
    Export,
    /// Delete all log content, current and archived
    Clear,
    /// Show log file locations, sizes and settings
    Status,
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, never into the log store itself.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, skipping causes already quoted by the top-level message.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided, print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let settings = Settings::resolve(cli.dir, cli.max_size, cli.timestamp);
    tracing::debug!(
        dir = ?settings.dir,
        max_size = settings.max_size,
        include_timestamp = settings.include_timestamp,
        "resolved settings",
    );
    let log = settings.lazy();
    let shared = log.get()?;
    let store = &*shared;
    let mut out = std::io::stdout().lock();

    match command {
        Commands::Write(args) => {
            let stdin = std::io::stdin().lock();
            write::handle(store, args, stdin, &mut out, format)?
        }
        Commands::Size => status::handle_size(store, &mut out, format)?,
        Commands::Gather => gather::handle_gather(store, &mut out)?,
        Commands::Export => gather::handle_export(store, &mut out, format)?,
        Commands::Clear => clear::handle(store, &mut out, format)?,
        Commands::Status => status::handle_status(store, &mut out, format)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
