// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lf size` and `lf status`: report on the log files.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use lf_core::{TempPathGenerator, TimestampFormatter};
use lf_storage::LogStore;
use serde::Serialize;

use crate::output::{format_bytes, write_json, OutputFormat};

#[derive(Serialize)]
struct SizeReport {
    bytes: u64,
}

#[derive(Serialize)]
struct StatusReport {
    current: String,
    current_bytes: u64,
    archive: String,
    /// `None` when no archived generation exists
    archive_bytes: Option<u64>,
    max_size: u64,
    include_timestamp: bool,
}

pub fn handle_size<T, G>(
    store: &LogStore<T, G>,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    let bytes = store.size()?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", bytes)?,
        OutputFormat::Json => write_json(out, &SizeReport { bytes })?,
    }
    Ok(())
}

pub fn handle_status<T, G>(
    store: &LogStore<T, G>,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()>
where
    T: TimestampFormatter,
    G: TempPathGenerator,
{
    let report = StatusReport {
        current: store.current_path().display().to_string(),
        current_bytes: store.size()?,
        archive: store.archive_path().display().to_string(),
        archive_bytes: file_len(store.archive_path()),
        max_size: store.max_size(),
        include_timestamp: store.include_timestamp(),
    };

    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "current:    {} ({})",
                report.current,
                format_bytes(report.current_bytes)
            )?;
            match report.archive_bytes {
                Some(bytes) => {
                    writeln!(out, "archive:    {} ({})", report.archive, format_bytes(bytes))?
                }
                None => writeln!(out, "archive:    {} (none)", report.archive)?,
            }
            writeln!(
                out,
                "rotate at:  {} ({} bytes)",
                format_bytes(report.max_size),
                report.max_size
            )?;
            writeln!(
                out,
                "timestamps: {}",
                if report.include_timestamp { "on" } else { "off" }
            )?;
        }
        OutputFormat::Json => write_json(out, &report)?,
    }
    Ok(())
}

fn file_len(path: &Path) -> Option<u64> {
    std::fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
