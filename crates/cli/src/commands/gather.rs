// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lf gather` and `lf export`: read the whole log back.

use std::io::Write;

use anyhow::Result;
use lf_core::{TempPathGenerator, TimestampFormatter};
use lf_storage::LogStore;
use serde::Serialize;

use crate::output::{write_json, OutputFormat};

#[derive(Serialize)]
struct ExportReport {
    path: String,
}

/// Print archive + current content verbatim.
pub fn handle_gather<T, G>(store: &LogStore<T, G>, out: &mut impl Write) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    out.write_all(store.gather().as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Export a standalone copy and print where it landed.
pub fn handle_export<T, G>(
    store: &LogStore<T, G>,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    let path = store.export_copy()?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", path.display())?,
        OutputFormat::Json => write_json(
            out,
            &ExportReport {
                path: path.display().to_string(),
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "gather_tests.rs"]
mod tests;
