// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store settings resolved from flags, then environment, then defaults.

use std::path::PathBuf;

use lf_core::{CacheDirProvider, FixedDirProvider};
use lf_storage::{LazyLogStore, LogStore, LogStoreConfig, LogStoreError, DEFAULT_MAX_LOG_SIZE};

use crate::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Explicit log directory; `None` means the user cache directory
    pub dir: Option<PathBuf>,
    pub max_size: u64,
    pub include_timestamp: bool,
}

impl Settings {
    /// Flag > environment > default for each setting.
    pub fn resolve(dir: Option<PathBuf>, max_size: Option<u64>, timestamp: bool) -> Self {
        Self {
            dir: dir.or_else(env::log_dir),
            max_size: max_size
                .or_else(env::max_log_size)
                .unwrap_or(DEFAULT_MAX_LOG_SIZE),
            include_timestamp: timestamp || env::timestamps(),
        }
    }

    pub fn config(&self) -> LogStoreConfig {
        LogStoreConfig::default()
            .with_max_size(self.max_size)
            .with_timestamps(self.include_timestamp)
    }

    /// Open the process's log store.
    pub fn open(&self) -> Result<LogStore, LogStoreError> {
        match &self.dir {
            Some(dir) => LogStore::open(&FixedDirProvider::new(dir), self.config()),
            None => LogStore::open(&CacheDirProvider, self.config()),
        }
    }

    /// Handle that opens the store on first use.
    pub fn lazy(&self) -> LazyLogStore {
        let settings = self.clone();
        LazyLogStore::new(move || settings.open())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
