// ABOUTME: Training session and manual hours override record types
// ABOUTME: Input models handed to the engine by the storage collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged training session
///
/// Sessions arrive from the storage collaborator with their timestamp in the
/// source system's minimal unit, nanoseconds since the Unix epoch. The engine
/// only reads the fields below; everything else a stored session carries
/// (mood, session theme, rolls, ...) stays with the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Opaque identifier issued by the storage collaborator
    pub id: String,
    /// Instant the session was logged for, in nanoseconds since the Unix epoch
    pub date: i64,
    /// Session length in whole minutes; negative values are clamped to zero
    /// during aggregation
    pub duration_minutes: i64,
}

impl TrainingSession {
    /// Create a new training session record
    #[must_use]
    pub fn new(id: impl Into<String>, date: i64, duration_minutes: i64) -> Self {
        Self {
            id: id.into(),
            date,
            duration_minutes,
        }
    }
}

/// A manually entered hours value for one calendar date
///
/// Overrides replace session-derived hours for their date; they are never
/// added to them. The storage collaborator guarantees at most one override
/// per date; if that guarantee is violated the last record in input order
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualHoursOverride {
    /// Calendar date the override applies to
    pub date: NaiveDate,
    /// Hours trained on that date; negative values are clamped to zero
    /// during aggregation
    pub hours: f64,
}

impl ManualHoursOverride {
    /// Create a new override record
    #[must_use]
    pub const fn new(date: NaiveDate, hours: f64) -> Self {
        Self { date, hours }
    }
}
