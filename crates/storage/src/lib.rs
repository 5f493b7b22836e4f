// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Size-bounded append-only log with a single archived generation.
//!
//! Two files live in the resolved directory:
//!   `<base_name>`      current log, the only file ever written
//!   `<base_name>.old`  previous generation, replaced wholesale on rotation

mod export;
mod lazy;
pub mod paths;
mod store;

pub use lazy::LazyLogStore;
pub use store::{LogStore, LogStoreConfig, LogStoreError, DEFAULT_BASE_NAME, DEFAULT_MAX_LOG_SIZE};
