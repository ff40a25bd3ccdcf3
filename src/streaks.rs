// ABOUTME: Weekly training streak calculation for the profile page
// ABOUTME: Counts back-to-back sessions no more than seven days apart, newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Weekly training streak
//!
//! A streak is alive while sessions keep landing within seven days of each
//! other. The walk starts from the most recent session: if that one is
//! already more than seven days before today the streak is zero, otherwise
//! every consecutive predecessor within seven days of the session after it
//! extends the count. Two sessions on the same day both count — the streak
//! measures sessions, not distinct days.

use chrono::{NaiveDate, TimeZone};
use tracing::{debug, warn};

use tatami_core::constants::streak::MAX_GAP_DAYS;
use tatami_core::models::TrainingSession;

use crate::normalize::date_key;

/// Number of consecutive sessions each within seven days of the next
///
/// `today` is passed explicitly so the engine never reads a clock;
/// sessions with unusable timestamps are skipped with a warning.
#[must_use]
pub fn weekly_streak<Tz: TimeZone>(
    sessions: &[TrainingSession],
    today: NaiveDate,
    tz: &Tz,
) -> u32 {
    let mut dated: Vec<(i64, NaiveDate)> = sessions
        .iter()
        .filter_map(|session| match date_key(session.date, tz) {
            Ok(date) => Some((session.date, date)),
            Err(error) => {
                warn!(
                    session_id = %session.id,
                    nanos = session.date,
                    %error,
                    "skipping session with unusable timestamp"
                );
                None
            }
        })
        .collect();
    dated.sort_by_key(|(instant, _)| *instant);
    dated.reverse();

    let Some((_, latest)) = dated.first() else {
        return 0;
    };
    if today.signed_duration_since(*latest).num_days() > MAX_GAP_DAYS {
        debug!(%latest, "most recent session too old, streak broken");
        return 0;
    }

    let mut streak = 1_u32;
    for pair in dated.windows(2) {
        let newer = pair[0].1;
        let older = pair[1].1;
        if newer.signed_duration_since(older).num_days() > MAX_GAP_DAYS {
            break;
        }
        streak += 1;
    }
    debug!(streak, sessions = dated.len(), "computed weekly streak");
    streak
}
