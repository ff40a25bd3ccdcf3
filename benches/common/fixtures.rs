// ABOUTME: Benchmark fixtures producing realistic training-log data
// ABOUTME: All values derive from index arithmetic so repeated runs see the same inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Benchmark fixtures producing realistic training-log data.
//!
//! All values derive from index arithmetic so repeated runs measure the
//! same inputs.

use chrono::{Days, NaiveDate};
use tatami_heatmap::{ManualHoursOverride, TrainingSession};

/// Session batch sizes the suites sweep over
#[derive(Debug, Clone, Copy)]
pub enum SessionBatchSize {
    /// Small dataset (50 sessions) - a casual season
    Small,
    /// Medium dataset (500 sessions) - a heavy training year
    Medium,
    /// Large dataset (5000 sessions) - a decade of history
    Large,
}

impl SessionBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }
}

/// Nanoseconds since the Unix epoch for a wall-clock hour on a date
fn nanos_at(date: NaiveDate, hour: u32) -> i64 {
    date.and_hms_opt(hour, 0, 0)
        .map_or(0, |moment| moment.and_utc().timestamp_nanos_opt().unwrap_or(0))
}

/// Generate sessions spread deterministically across one calendar year
///
/// Dates, times, and durations derive from index arithmetic so every run
/// measures identical inputs; several sessions land on shared dates to
/// exercise the summing path.
#[allow(clippy::cast_possible_truncation)]
pub fn generate_sessions(year: i32, batch: SessionBatchSize) -> Vec<TrainingSession> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    (0..batch.count())
        .map(|index| {
            let day_offset = (index * 3) % 365;
            let date = jan1
                .checked_add_days(Days::new(day_offset as u64))
                .unwrap_or(jan1);
            let hour = 6 + (index * 5) % 14;
            let minutes = 30 + ((index * 13) % 120) as i64;
            TrainingSession::new(
                format!("bench_session_{index}"),
                nanos_at(date, hour as u32),
                minutes,
            )
        })
        .collect()
}

/// Generate manual overrides on a deterministic subset of dates
#[allow(clippy::cast_precision_loss)]
pub fn generate_overrides(year: i32, count: usize) -> Vec<ManualHoursOverride> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| {
            let day_offset = (index * 17) % 365;
            let date = jan1
                .checked_add_days(Days::new(day_offset as u64))
                .unwrap_or(jan1);
            let hours = ((index * 7) % 16) as f64 / 4.0;
            ManualHoursOverride::new(date, hours)
        })
        .collect()
}
