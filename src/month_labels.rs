// ABOUTME: Month label placement over the year grid's week columns
// ABOUTME: Computes start column and span for each of the twelve header labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Month label placement
//!
//! The header row above the grid shows one label per month, positioned at
//! the first week column containing the 1st of that month and spanning
//! through the column containing its last day. Labels are a pure
//! derivation of the grid; they never affect cell layout.

use serde::{Deserialize, Serialize};

use tatami_core::constants::limits::MONTHS_PER_YEAR;
use tatami_core::constants::months::ABBREVIATIONS;
use tatami_core::errors::{EngineError, EngineResult};

use crate::grid::{month_bounds, YearGrid};

/// Header label for one month of the displayed year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    /// Three-letter English month name
    pub name: String,
    /// Index of the first week column containing the 1st of the month
    pub start_column: usize,
    /// Number of week columns the month touches, always at least 1
    pub column_span: usize,
}

/// Place the twelve month labels for a year grid
///
/// Labels come back in calendar order with non-decreasing start columns;
/// adjacent months share a column exactly when a week straddles the month
/// boundary.
///
/// # Errors
///
/// Returns `EngineError::Internal` if the grid does not contain a month's
/// first or last day — impossible for a grid that passed its own
/// invariant check.
pub fn place_month_labels(grid: &YearGrid) -> EngineResult<Vec<MonthLabel>> {
    let year = grid.year();
    let mut labels = Vec::with_capacity(MONTHS_PER_YEAR as usize);

    for month in 1..=MONTHS_PER_YEAR {
        let (first, last) = month_bounds(year, month)?;

        let start_column = grid
            .weeks()
            .iter()
            .position(|week| week.contains(&Some(first)))
            .ok_or_else(|| {
                EngineError::internal(format!("grid for {year} has no week containing {first}"))
            })?;
        let end_column = grid.weeks()[start_column..]
            .iter()
            .position(|week| week.contains(&Some(last)))
            .map(|offset| start_column + offset)
            .ok_or_else(|| {
                EngineError::internal(format!("grid for {year} has no week containing {last}"))
            })?;

        labels.push(MonthLabel {
            name: month_name(month),
            start_column,
            column_span: end_column - start_column + 1,
        });
    }

    Ok(labels)
}

/// Abbreviated English name for a month index in 1..=12
#[must_use]
pub fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|index| ABBREVIATIONS.get(index as usize))
        .copied()
        .unwrap_or_default()
        .to_owned()
}
