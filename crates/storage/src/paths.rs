// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path builders for the current and archived log files.
//!
//! Both paths are derived from the same directory and base name, so the
//! writer and any reader agree on where each generation lives:
//!   `{dir}/{base_name}`
//!   `{dir}/{base_name}.old`

use std::path::{Path, PathBuf};

/// Suffix appended to the base name for the archived generation.
pub const ARCHIVE_SUFFIX: &str = ".old";

/// Build the path to the current log file.
pub fn current_path(dir: &Path, base_name: &str) -> PathBuf {
    dir.join(base_name)
}

/// Build the path to the archived log file.
///
/// The suffix is appended rather than substituted for the extension:
/// `logfile.txt` archives to `logfile.txt.old`.
pub fn archive_path(dir: &Path, base_name: &str) -> PathBuf {
    dir.join(format!("{}{}", base_name, ARCHIVE_SUFFIX))
}

/// Sibling path used while atomically writing `path`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
