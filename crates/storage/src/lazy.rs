// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred opening of a [`LogStore`].
//!
//! Lets the composition root hand out a log handle before anything has been
//! written, without touching the filesystem until the first use.

use std::sync::Arc;

use lf_core::{SystemTimestamp, TempPathGenerator, TimestampFormatter, UuidTempPaths};
use parking_lot::Mutex;

use crate::{LogStore, LogStoreError};

type Init<T, G> = Box<dyn Fn() -> Result<LogStore<T, G>, LogStoreError> + Send + Sync>;

/// Opens its [`LogStore`] on the first [`get`](Self::get).
///
/// Every later call returns the same shared instance. If the first open
/// fails, the error is returned and the next `get` tries again.
pub struct LazyLogStore<T = SystemTimestamp, G = UuidTempPaths> {
    init: Init<T, G>,
    store: Mutex<Option<Arc<LogStore<T, G>>>>,
}

impl<T: TimestampFormatter, G: TempPathGenerator> LazyLogStore<T, G> {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> Result<LogStore<T, G>, LogStoreError> + Send + Sync + 'static,
    {
        Self {
            init: Box::new(init),
            store: Mutex::new(None),
        }
    }

    /// Return the store, opening it if this is the first successful call.
    pub fn get(&self) -> Result<Arc<LogStore<T, G>>, LogStoreError> {
        let mut slot = self.store.lock();
        if let Some(store) = slot.as_ref() {
            return Ok(Arc::clone(store));
        }
        let store = Arc::new((self.init)()?);
        *slot = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Whether the store has been opened yet.
    pub fn is_open(&self) -> bool {
        self.store.lock().is_some()
    }
}

#[cfg(test)]
#[path = "lazy_tests.rs"]
mod tests;
