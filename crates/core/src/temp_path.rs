// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch-file path generation for exported copies.

use std::path::{Path, PathBuf};
#[cfg(any(test, feature = "test-support"))]
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(any(test, feature = "test-support"))]
use std::sync::Arc;

/// Extension given to every generated path.
pub const TEMP_EXTENSION: &str = "txt";

/// Generates unique paths in a scratch directory.
///
/// Paths must not collide across calls, including concurrent ones.
/// Generating a path does not create the file.
pub trait TempPathGenerator: Send + Sync {
    fn new_path(&self, prefix: &str) -> PathBuf;
}

/// UUID-suffixed paths for production use: `<dir>/<prefix>-<uuid>.txt`
#[derive(Clone, Debug)]
pub struct UuidTempPaths {
    dir: PathBuf,
}

impl UuidTempPaths {
    /// Generate paths under a specific scratch directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for UuidTempPaths {
    fn default() -> Self {
        Self::in_dir(std::env::temp_dir())
    }
}

impl TempPathGenerator for UuidTempPaths {
    fn new_path(&self, prefix: &str) -> PathBuf {
        let id = uuid::Uuid::new_v4();
        self.dir.join(format!("{}-{}.{}", prefix, id, TEMP_EXTENSION))
    }
}

/// Sequential paths for testing: `<dir>/<prefix>-1.txt`, `<dir>/<prefix>-2.txt`, ...
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug)]
pub struct SequentialTempPaths {
    dir: PathBuf,
    counter: Arc<AtomicU64>,
}

#[cfg(any(test, feature = "test-support"))]
impl SequentialTempPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl TempPathGenerator for SequentialTempPaths {
    fn new_path(&self, prefix: &str) -> PathBuf {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.dir.join(format!("{}-{}.{}", prefix, n, TEMP_EXTENSION))
    }
}

#[cfg(test)]
#[path = "temp_path_tests.rs"]
mod tests;
