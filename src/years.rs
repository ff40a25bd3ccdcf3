// ABOUTME: Year navigation range and stepping for the heat-map header
// ABOUTME: Unions data years with the current and displayed year, bounded forward only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Year navigation
//!
//! The year selector offers every year that holds session data, plus the
//! current year and whatever year is on screen — so navigating into an
//! empty past year keeps that year selectable instead of snapping back.
//! Stepping forward stops at the current year; stepping backward is free
//! down to the grid's minimum.

use std::collections::BTreeSet;

use tracing::debug;

use tatami_core::constants::limits::MIN_GRID_YEAR;

/// Years offered for navigation, sorted descending
///
/// The union of the data years, `current_year`, and `displayed_year`,
/// deduplicated.
#[must_use]
pub fn available_years<I>(session_years: I, current_year: i32, displayed_year: i32) -> Vec<i32>
where
    I: IntoIterator<Item = i32>,
{
    let mut years: BTreeSet<i32> = session_years.into_iter().collect();
    years.insert(current_year);
    years.insert(displayed_year);
    let years: Vec<i32> = years.into_iter().rev().collect();
    debug!(count = years.len(), "computed navigable years");
    years
}

/// The next year forward, bounded at the current year
#[must_use]
pub const fn next_year(displayed_year: i32, current_year: i32) -> Option<i32> {
    if displayed_year < current_year {
        Some(displayed_year + 1)
    } else {
        None
    }
}

/// The previous year backward, bounded at the grid's minimum year
#[must_use]
pub const fn previous_year(displayed_year: i32) -> Option<i32> {
    if displayed_year > MIN_GRID_YEAR {
        Some(displayed_year - 1)
    } else {
        None
    }
}
