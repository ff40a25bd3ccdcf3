// ABOUTME: Monday-anchored month calendar grid and per-date session grouping
// ABOUTME: Covers a month with whole weeks and lists its sessions chronologically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Month calendar
//!
//! The dashboard's month view needs the month covered by whole Monday-to-
//! Sunday weeks, so rows line up with the year heat-map. Unlike the year
//! grid, cells outside the month are real dates (the tail of the previous
//! month, the head of the next), rendered dimmed — [`MonthGrid::in_month`]
//! tells the two apart.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tatami_core::constants::limits::{DAYS_PER_WEEK, MAX_GRID_YEAR, MIN_GRID_YEAR, MONTHS_PER_YEAR};
use tatami_core::errors::{EngineError, EngineResult};
use tatami_core::models::TrainingSession;

use crate::grid::{iso_weekday, month_bounds, week_start};
use crate::normalize::date_key;

/// One month covered by whole weeks, Monday-anchored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<[NaiveDate; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    /// Build the calendar grid for a month
    ///
    /// Rows run from the Monday on or before the 1st through the Sunday on
    /// or after the month's last day; four to six weeks depending on the
    /// month's shape.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidYear` or `EngineError::InvalidMonth`
    /// when the target month is outside the supported calendar.
    pub fn build(year: i32, month: u32) -> EngineResult<Self> {
        if !(MIN_GRID_YEAR..=MAX_GRID_YEAR).contains(&year) {
            return Err(EngineError::InvalidYear { year });
        }
        let (first, last) = month_bounds(year, month)?;

        let start = week_start(first)
            .ok_or_else(|| EngineError::internal("month start precedes representable dates"))?;
        let end = last
            .checked_add_days(Days::new((DAYS_PER_WEEK - 1 - iso_weekday(last)) as u64))
            .ok_or_else(|| EngineError::internal("month end exceeds representable dates"))?;

        let mut weeks = Vec::new();
        let mut cursor = start;
        while cursor <= end {
            let mut cells = [cursor; DAYS_PER_WEEK];
            for cell in &mut cells {
                *cell = cursor;
                cursor = cursor.succ_opt().ok_or_else(|| {
                    EngineError::internal("date overflow while building month grid")
                })?;
            }
            weeks.push(cells);
        }
        Ok(Self { year, month, weeks })
    }

    /// Year of the displayed month
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1..=12
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// All week rows in order; every cell is a concrete date
    #[must_use]
    pub fn weeks(&self) -> &[[NaiveDate; DAYS_PER_WEEK]] {
        &self.weeks
    }

    /// Whether a date belongs to the displayed month rather than the
    /// dimmed overflow of its neighbors
    #[must_use]
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Group sessions by their local calendar date
///
/// Sessions with unusable timestamps are dropped with a warning, matching
/// the aggregator's partial-failure tolerance. Within a date, sessions keep
/// input order.
#[must_use]
pub fn sessions_by_date<'a, Tz: TimeZone>(
    sessions: &'a [TrainingSession],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a TrainingSession>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&TrainingSession>> = BTreeMap::new();
    for session in sessions {
        match date_key(session.date, tz) {
            Ok(date) => grouped.entry(date).or_default().push(session),
            Err(error) => {
                warn!(
                    session_id = %session.id,
                    nanos = session.date,
                    %error,
                    "dropping session with unusable timestamp"
                );
            }
        }
    }
    grouped
}

/// The sessions of one month, chronological by raw instant
#[must_use]
pub fn month_sessions<'a, Tz: TimeZone>(
    sessions: &'a [TrainingSession],
    year: i32,
    month: u32,
    tz: &Tz,
) -> Vec<(NaiveDate, &'a TrainingSession)> {
    let mut listed: Vec<(NaiveDate, &TrainingSession)> = sessions
        .iter()
        .filter_map(|session| {
            let date = date_key(session.date, tz).ok()?;
            (date.year() == year && date.month() == month).then_some((date, session))
        })
        .collect();
    listed.sort_by_key(|(_, session)| session.date);
    listed
}

/// The month before, rolling the year backward from January
#[must_use]
pub const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, MONTHS_PER_YEAR)
    } else {
        (year, month - 1)
    }
}

/// The month after, rolling the year forward from December
#[must_use]
pub const fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= MONTHS_PER_YEAR {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
