// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Log directory override: LF_LOG_DIR
pub fn log_dir() -> Option<PathBuf> {
    std::env::var("LF_LOG_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Rotation threshold in bytes: LF_MAX_LOG_SIZE (ignored if unparseable)
pub fn max_log_size() -> Option<u64> {
    std::env::var("LF_MAX_LOG_SIZE")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Timestamp prefix: LF_TIMESTAMP=1 or LF_TIMESTAMP=true
pub fn timestamps() -> bool {
    std::env::var("LF_TIMESTAMP").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Diagnostic filter directives: LF_LOG (e.g. `debug`, `lf_storage=debug`)
pub fn log_filter() -> Option<String> {
    std::env::var("LF_LOG").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
