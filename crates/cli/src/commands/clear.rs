// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lf clear`: drop all log content.

use std::io::Write;

use anyhow::Result;
use lf_core::{TempPathGenerator, TimestampFormatter};
use lf_storage::LogStore;
use serde::Serialize;

use crate::output::{write_json, OutputFormat};

#[derive(Serialize)]
struct ClearReport {
    cleared: bool,
    size: u64,
}

pub fn handle<T, G>(store: &LogStore<T, G>, out: &mut impl Write, format: OutputFormat) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    store.clear()?;
    match format {
        OutputFormat::Text => writeln!(out, "Cleared {}", store.current_path().display())?,
        OutputFormat::Json => write_json(
            out,
            &ClearReport {
                cleared: true,
                size: store.size()?,
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
