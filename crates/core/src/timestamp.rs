// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp prefix for log records.
//!
//! The layout is fixed (`yyyy-MM-dd'T'HH:mm:ss.SSS`) and always rendered in
//! UTC, independent of the system locale and time zone, so gathered output
//! sorts and parses the same everywhere. The string carries no zone marker.

use chrono::{DateTime, Utc};

/// `strftime` layout for record timestamps, e.g. `2026-01-30T08:14:09.123`.
///
/// Times are UTC. The layout has no offset suffix, so readers must not
/// interpret it as local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Renders the current time for a record prefix.
pub trait TimestampFormatter: Send + Sync {
    fn now(&self) -> String;
}

/// Format an instant using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Wall-clock UTC timestamps for production use
#[derive(Clone, Debug, Default)]
pub struct SystemTimestamp;

impl TimestampFormatter for SystemTimestamp {
    fn now(&self) -> String {
        format_timestamp(Utc::now())
    }
}

/// Always renders the same string, for tests
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug)]
pub struct FixedTimestamp(pub String);

#[cfg(any(test, feature = "test-support"))]
impl FixedTimestamp {
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }
}

#[cfg(any(test, feature = "test-support"))]
impl TimestampFormatter for FixedTimestamp {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
