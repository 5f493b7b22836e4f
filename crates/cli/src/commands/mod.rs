// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations
//!
//! Each handler takes the already-opened store and writes its result to
//! `out`, so the composition root stays the only place that touches
//! configuration.

pub mod clear;
pub mod gather;
pub mod status;
pub mod write;
