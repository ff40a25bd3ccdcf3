// ABOUTME: ISO-week-aligned year grid construction for the calendar heat-map
// ABOUTME: Builds week-by-weekday cells with padding and verifies placement invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Year grid construction
//!
//! The heat-map body is a rectangle of week columns by weekday rows, rows
//! indexed 0=Monday through 6=Sunday. Cells before Jan 1 and after Dec 31
//! of the target year are padding (`None`). Placement is purely offset
//! arithmetic from Jan 1's ISO weekday; that every date lands in the row of
//! its own weekday is an emergent consequence of the construction, and
//! [`YearGrid::check_invariants`] verifies it before a grid is released.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tatami_core::constants::limits::{DAYS_PER_WEEK, MAX_GRID_YEAR, MIN_GRID_YEAR};
use tatami_core::errors::{EngineError, EngineResult};

/// One grid column: seven cells indexed by ISO weekday, Monday first
pub type Week = [Option<NaiveDate>; DAYS_PER_WEEK];

/// ISO weekday index of a date, 0=Monday through 6=Sunday
#[must_use]
pub fn iso_weekday(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// The Monday on or before a date
///
/// `None` only when the result would fall before the representable date
/// minimum, far outside the supported year range.
#[must_use]
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(iso_weekday(date) as u64))
}

/// Number of days in a calendar year, 365 or 366
///
/// # Errors
///
/// Returns `EngineError::InvalidYear` when the year is outside the
/// supported range.
pub fn days_in_year(year: i32) -> EngineResult<i64> {
    let jan1 = first_of_year(year)?;
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or(EngineError::InvalidYear { year })?;
    Ok(dec31.signed_duration_since(jan1).num_days() + 1)
}

fn first_of_year(year: i32) -> EngineResult<NaiveDate> {
    if !(MIN_GRID_YEAR..=MAX_GRID_YEAR).contains(&year) {
        return Err(EngineError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(EngineError::InvalidYear { year })
}

/// First and last date of a calendar month, shared by the label placer,
/// the month calendar, and the volume buckets.
pub(crate) fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidYear { year })?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = first_of_next
        .and_then(|date| date.pred_opt())
        .ok_or(EngineError::InvalidYear { year })?;
    Ok((first, last))
}

/// Dense week-by-weekday grid for one calendar year
///
/// Column count is `ceil((iso_weekday(Jan 1) + days_in_year) / 7)`; every
/// column holds exactly seven cells. The grid is a recomputed value with no
/// state of its own — build, render, discard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrid {
    year: i32,
    iso_weekday_of_jan1: usize,
    weeks: Vec<Week>,
}

impl YearGrid {
    /// Build the grid for a target year
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidYear` for years outside the supported
    /// range, and `EngineError::Internal` if the built grid fails its own
    /// placement post-condition (a bug, never bad input).
    pub fn build(year: i32) -> EngineResult<Self> {
        let jan1 = first_of_year(year)?;
        let days = days_in_year(year)?;
        let anchor = i64::from(jan1.weekday().num_days_from_monday());
        let total_weeks = ((anchor + days) as u64).div_ceil(7);

        let mut day_offset = -anchor;
        let weeks = (0..total_weeks)
            .map(|_| {
                let mut cells: Week = [None; DAYS_PER_WEEK];
                for cell in &mut cells {
                    if (0..days).contains(&day_offset) {
                        *cell = u64::try_from(day_offset)
                            .ok()
                            .and_then(|offset| jan1.checked_add_days(Days::new(offset)));
                    }
                    day_offset += 1;
                }
                cells
            })
            .collect();

        let grid = Self {
            year,
            iso_weekday_of_jan1: anchor as usize,
            weeks,
        };
        grid.check_invariants()?;
        debug!(year, weeks = grid.weeks.len(), "built year grid");
        Ok(grid)
    }

    /// Target year this grid covers
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// ISO weekday of Jan 1, which is also the row of the first populated cell
    #[must_use]
    pub const fn iso_weekday_of_jan1(&self) -> usize {
        self.iso_weekday_of_jan1
    }

    /// All week columns in order
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of week columns
    #[must_use]
    pub fn total_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// The date at a grid position, `None` for padding or out-of-bounds
    #[must_use]
    pub fn cell(&self, week_index: usize, day_index: usize) -> Option<NaiveDate> {
        self.weeks
            .get(week_index)
            .and_then(|week| week.get(day_index))
            .copied()
            .flatten()
    }

    /// Iterate every populated date in column-major order, which is
    /// ascending calendar order
    pub fn iter_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }

    /// Verify the grid's placement post-conditions
    ///
    /// Checks that populated cells hold exactly the year's dates, in order,
    /// each in the row matching its own ISO weekday. Cheap (at most 372
    /// cells) and run by [`YearGrid::build`] before returning.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Internal` naming the first offending cell.
    pub fn check_invariants(&self) -> EngineResult<()> {
        let days = days_in_year(self.year)?;
        let mut expected = first_of_year(self.year)?;
        let mut populated = 0_i64;

        for (week_index, week) in self.weeks.iter().enumerate() {
            for (day_index, cell) in week.iter().enumerate() {
                let Some(date) = cell else { continue };
                if iso_weekday(*date) != day_index {
                    return Err(EngineError::internal(format!(
                        "{date} sits in row {day_index} of week {week_index}, expected row {}",
                        iso_weekday(*date)
                    )));
                }
                if *date != expected {
                    return Err(EngineError::internal(format!(
                        "week {week_index} row {day_index} holds {date}, expected {expected}"
                    )));
                }
                populated += 1;
                if populated < days {
                    expected = date.succ_opt().ok_or_else(|| {
                        EngineError::internal("date overflow while scanning grid")
                    })?;
                }
            }
        }

        if populated == days {
            Ok(())
        } else {
            Err(EngineError::internal(format!(
                "grid for {} holds {populated} dates, expected {days}",
                self.year
            )))
        }
    }
}
