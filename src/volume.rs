// ABOUTME: Trailing week and month training volume buckets for trend charts
// ABOUTME: Buckets sessions by date window and sums hours or counts sessions per bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Training volume buckets
//!
//! The profile page charts recent volume as trailing windows ending at
//! today: Monday-anchored weeks or whole calendar months, oldest first.
//! Each bucket carries a render-ready label; values are either summed
//! hours (rounded for display) or plain session counts.

use chrono::{Datelike, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tatami_core::constants::months::ABBREVIATIONS;
use tatami_core::constants::time::MINUTES_PER_HOUR;
use tatami_core::errors::{EngineError, EngineResult};
use tatami_core::models::TrainingSession;

use crate::aggregate::round_to_tenth;
use crate::grid::{month_bounds, week_start};
use crate::month_calendar::previous_month;
use crate::normalize::date_key;

/// One date window of a volume chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Render-ready label, e.g. `"Mar 4"` for a week or `"Mar 2024"` for a month
    pub label: String,
    /// First date inside the window
    pub start: NaiveDate,
    /// Last date inside the window, inclusive
    pub end: NaiveDate,
}

/// What a volume value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMode {
    /// Sum of session hours per bucket, rounded to one decimal
    Hours,
    /// Number of sessions per bucket
    Sessions,
}

/// One charted point: a bucket label and its volume value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    /// Label copied from the bucket
    pub label: String,
    /// Hours or session count depending on the mode
    pub value: f64,
}

/// The `count` Monday-anchored weeks ending with today's week, oldest first
///
/// The newest bucket is the week containing `today`; its end extends past
/// today to Sunday, matching how the chart frames the current week.
///
/// # Errors
///
/// Returns `EngineError::Internal` when the window reaches before the
/// representable date range.
pub fn trailing_week_buckets(today: NaiveDate, count: usize) -> EngineResult<Vec<TimeBucket>> {
    let newest_start = week_start(today)
        .ok_or_else(|| EngineError::internal("week window precedes representable dates"))?;

    let mut buckets = Vec::with_capacity(count);
    for weeks_back in (0..count).rev() {
        let start = newest_start
            .checked_sub_days(Days::new(weeks_back as u64 * 7))
            .ok_or_else(|| EngineError::internal("week window precedes representable dates"))?;
        let end = start
            .checked_add_days(Days::new(6))
            .ok_or_else(|| EngineError::internal("week window exceeds representable dates"))?;
        buckets.push(TimeBucket {
            label: day_label(start),
            start,
            end,
        });
    }
    Ok(buckets)
}

/// The `count` calendar months ending with today's month, oldest first
///
/// # Errors
///
/// Returns `EngineError::InvalidYear` when the window reaches before the
/// supported calendar.
pub fn trailing_month_buckets(today: NaiveDate, count: usize) -> EngineResult<Vec<TimeBucket>> {
    let mut months = Vec::with_capacity(count);
    let mut cursor = (today.year(), today.month());
    for _ in 0..count {
        months.push(cursor);
        cursor = previous_month(cursor.0, cursor.1);
    }
    months.reverse();

    months
        .into_iter()
        .map(|(year, month)| {
            let (start, end) = month_bounds(year, month)?;
            Ok(TimeBucket {
                label: month_label(start),
                start,
                end,
            })
        })
        .collect()
}

/// Volume per bucket over a session collection
///
/// Bucket membership is by local date key, inclusive of both window ends.
/// Sessions with unusable timestamps are dropped with a warning; negative
/// durations count as zero hours but still count as sessions.
#[must_use]
pub fn volume_per_bucket<Tz: TimeZone>(
    sessions: &[TrainingSession],
    buckets: &[TimeBucket],
    mode: VolumeMode,
    tz: &Tz,
) -> Vec<VolumePoint> {
    let dated: Vec<(NaiveDate, &TrainingSession)> = sessions
        .iter()
        .filter_map(|session| match date_key(session.date, tz) {
            Ok(date) => Some((date, session)),
            Err(error) => {
                warn!(
                    session_id = %session.id,
                    nanos = session.date,
                    %error,
                    "dropping session with unusable timestamp"
                );
                None
            }
        })
        .collect();

    buckets
        .iter()
        .map(|bucket| {
            let members = dated
                .iter()
                .filter(|(date, _)| (bucket.start..=bucket.end).contains(date));
            let value = match mode {
                VolumeMode::Hours => round_to_tenth(
                    members
                        .map(|(_, session)| session.duration_minutes.max(0) as f64 / MINUTES_PER_HOUR)
                        .sum(),
                ),
                VolumeMode::Sessions => members.count() as f64,
            };
            VolumePoint {
                label: bucket.label.clone(),
                value,
            }
        })
        .collect()
}

fn day_label(date: NaiveDate) -> String {
    format!("{} {}", ABBREVIATIONS[date.month0() as usize], date.day())
}

fn month_label(date: NaiveDate) -> String {
    format!("{} {}", ABBREVIATIONS[date.month0() as usize], date.year())
}
