// ABOUTME: Session and override aggregation into the canonical daily hours map
// ABOUTME: Sums session hours per date, then applies manual overrides as full replacements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Daily hours aggregation
//!
//! Two record streams feed the heat-map: logged sessions, whose durations
//! are summed per local date, and manual per-date overrides, which replace
//! whatever the sessions produced for that date. Replacement is the whole
//! point of an override — a user correcting "actually I trained 5 hours
//! that Saturday" must not have sessions added back on top.
//!
//! The map is recomputed wholesale on every call, never patched
//! incrementally: override application is not associative with incremental
//! session addition, so a cached map plus "just add the new session" would
//! silently resurrect additive behavior on overridden dates.

use chrono::TimeZone;
use tracing::{debug, warn};

use tatami_core::constants::rounding::{QUARTER_HOUR_STEPS, TENTH_STEPS};
use tatami_core::constants::time::MINUTES_PER_HOUR;
use tatami_core::models::{DailyHoursMap, ManualHoursOverride, TrainingSession};

use crate::normalize::date_key;

/// Sum session-derived hours per calendar date in `tz`
///
/// Sessions with an unusable timestamp are dropped individually and the
/// rest of the aggregation continues. Negative durations are clamped to
/// zero before conversion. Summation runs in input order, so identical
/// inputs always reproduce bit-identical totals.
#[must_use]
pub fn session_daily_hours<Tz: TimeZone>(
    sessions: &[TrainingSession],
    tz: &Tz,
) -> DailyHoursMap {
    let mut map = DailyHoursMap::new();
    let mut dropped = 0_usize;
    for session in sessions {
        let date = match date_key(session.date, tz) {
            Ok(date) => date,
            Err(error) => {
                warn!(
                    session_id = %session.id,
                    nanos = session.date,
                    %error,
                    "dropping session with unusable timestamp"
                );
                dropped += 1;
                continue;
            }
        };
        let minutes = if session.duration_minutes < 0 {
            warn!(
                session_id = %session.id,
                minutes = session.duration_minutes,
                "clamping negative session duration to zero"
            );
            0
        } else {
            session.duration_minutes
        };
        map.add(date, minutes as f64 / MINUTES_PER_HOUR);
    }
    debug!(
        sessions = sessions.len(),
        dropped,
        days = map.len(),
        "summed session hours per date"
    );
    map
}

/// Apply manual overrides onto a session-derived map, replacing per date
///
/// Negative override hours are clamped to zero. Duplicate dates in the
/// input (a storage-layer bug) resolve last-write-wins in input order.
pub fn apply_overrides(map: &mut DailyHoursMap, overrides: &[ManualHoursOverride]) {
    for entry in overrides {
        let hours = if entry.hours < 0.0 {
            warn!(
                date = %entry.date,
                hours = entry.hours,
                "clamping negative override hours to zero"
            );
            0.0
        } else {
            entry.hours
        };
        map.set(entry.date, hours);
    }
}

/// Build the merged daily hours map from sessions and overrides
///
/// Equivalent to [`session_daily_hours`] followed by [`apply_overrides`];
/// the result is the canonical date-to-hours mapping the rest of the engine
/// consumes.
#[must_use]
pub fn aggregate_daily_hours<Tz: TimeZone>(
    sessions: &[TrainingSession],
    overrides: &[ManualHoursOverride],
    tz: &Tz,
) -> DailyHoursMap {
    let mut map = session_daily_hours(sessions, tz);
    apply_overrides(&mut map, overrides);
    debug!(
        overrides = overrides.len(),
        days = map.len(),
        "merged manual overrides into daily hours"
    );
    map
}

/// Round hours to one decimal place for display totals
#[must_use]
pub fn round_to_tenth(hours: f64) -> f64 {
    (hours * TENTH_STEPS).round() / TENTH_STEPS
}

/// Round hours to the nearest quarter hour, clamped at zero
///
/// Used when echoing an existing value into the manual-hours entry field,
/// which steps in 0.25 h increments.
#[must_use]
pub fn round_to_quarter_hour(hours: f64) -> f64 {
    ((hours * QUARTER_HOUR_STEPS).round() / QUARTER_HOUR_STEPS).max(0.0)
}
