// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lf-core: capabilities the log store consumes but does not own.
//!
//! - [`DirectoryProvider`] resolves the writable directory holding the log files.
//! - [`TimestampFormatter`] renders the optional per-record timestamp prefix.
//! - [`TempPathGenerator`] hands out collision-free scratch paths for exports.

pub mod directory;
pub mod temp_path;
pub mod timestamp;

pub use directory::{CacheDirProvider, DirectoryError, DirectoryProvider, FixedDirProvider};
pub use temp_path::{TempPathGenerator, UuidTempPaths};
pub use timestamp::{format_timestamp, SystemTimestamp, TimestampFormatter, TIMESTAMP_FORMAT};

#[cfg(any(test, feature = "test-support"))]
pub use temp_path::SequentialTempPaths;
#[cfg(any(test, feature = "test-support"))]
pub use timestamp::FixedTimestamp;
