// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of the directory that holds the log files.

use std::path::PathBuf;
use thiserror::Error;

/// Subdirectory created under the platform cache directory.
pub const CACHE_SUBDIR: &str = "lf";

/// Errors that can occur while resolving the log directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no cache directory available (set LF_LOG_DIR or HOME)")]
    NoCacheDir,
}

/// Resolves the writable directory for the log files.
///
/// Must be deterministic for a given process and user.
pub trait DirectoryProvider: Send + Sync {
    fn resolve(&self) -> Result<PathBuf, DirectoryError>;
}

/// Per-user cache directory: `~/.cache/lf` on Linux, `~/Library/Caches/lf` on macOS.
#[derive(Clone, Debug, Default)]
pub struct CacheDirProvider;

impl DirectoryProvider for CacheDirProvider {
    fn resolve(&self) -> Result<PathBuf, DirectoryError> {
        dirs::cache_dir()
            .map(|dir| dir.join(CACHE_SUBDIR))
            .ok_or(DirectoryError::NoCacheDir)
    }
}

/// Always resolves to the same, caller-chosen directory.
#[derive(Clone, Debug)]
pub struct FixedDirProvider(pub PathBuf);

impl FixedDirProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl DirectoryProvider for FixedDirProvider {
    fn resolve(&self) -> Result<PathBuf, DirectoryError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
