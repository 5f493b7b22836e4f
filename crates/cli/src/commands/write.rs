// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lf write`: append records to the log.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use lf_core::{TempPathGenerator, TimestampFormatter};
use lf_storage::LogStore;
use serde::Serialize;

use crate::output::{write_json, OutputFormat};

#[derive(Args)]
pub struct WriteArgs {
    /// Lines to append, one record each (reads stdin when omitted)
    pub lines: Vec<String>,
}

#[derive(Serialize)]
struct WriteReport {
    written: usize,
    size: u64,
}

pub fn handle<T, G>(
    store: &LogStore<T, G>,
    args: WriteArgs,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    let written = if args.lines.is_empty() {
        write_input(store, input)?
    } else {
        for line in &args.lines {
            store.write(line)?;
        }
        args.lines.len()
    };

    match format {
        OutputFormat::Text => {}
        OutputFormat::Json => {
            let size = store.size()?;
            write_json(out, &WriteReport { written, size })?;
        }
    }
    Ok(())
}

/// Write every line of `input` as its own record.
///
/// Line endings are kept as given, so `\r\n` input stays `\r\n` in the log.
fn write_input<T, G>(store: &LogStore<T, G>, mut input: impl BufRead) -> Result<usize>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    let mut count = 0;
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(count);
        }
        store.write(&line)?;
        count += 1;
    }
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
