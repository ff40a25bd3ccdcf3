// ABOUTME: Error types for the Tatami heat-map engine
// ABOUTME: Defines EngineError variants and the EngineResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

use thiserror::Error;

/// Result alias used by all fallible engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the heat-map engine
///
/// Session-level problems (`InvalidTimestamp`) are recoverable: the
/// aggregator drops the offending record and keeps going. Structural
/// problems (`InvalidYear`, `InvalidMonth`, `InvalidPalette`) fail the whole
/// operation before any partial output is produced.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Session timestamp cannot be turned into a local calendar date
    #[error("invalid session timestamp: {nanos} ns is not a usable instant")]
    InvalidTimestamp {
        /// Raw nanosecond instant as received from the session record
        nanos: i64,
    },

    /// Target year is outside the range the grid supports
    #[error("year {year} is outside the supported range 1..=9999")]
    InvalidYear {
        /// Rejected year value
        year: i32,
    },

    /// Month index is outside 1..=12
    #[error("month {month} is outside 1..=12")]
    InvalidMonth {
        /// Rejected month value
        month: u32,
    },

    /// Custom palette failed construction-time validation
    #[error("invalid palette: {0}")]
    InvalidPalette(&'static str),

    /// An internal post-condition did not hold; indicates a bug, not bad input
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl EngineError {
    /// Build an `Internal` error from any displayable detail
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}
