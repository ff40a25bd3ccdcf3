// ABOUTME: Unit tests for the year grid builder
// ABOUTME: Validates cell placement, padding, week counts, and invariants across years
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use tatami_heatmap::grid::{days_in_year, iso_weekday, week_start, YearGrid};
use tatami_heatmap::EngineError;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Years exercised by the structural sweep: four full leap cycles from the
/// bottom of the supported range, plus century boundaries and the extremes.
fn sweep_years() -> impl Iterator<Item = i32> {
    (1..=400).chain([
        1582, 1600, 1700, 1800, 1900, 2000, 2020, 2023, 2024, 2025, 2100, 9999,
    ])
}

#[test]
fn test_grid_structure_across_years() {
    for year in sweep_years() {
        let grid = YearGrid::build(year).unwrap();
        let days = days_in_year(year).unwrap();
        let anchor = grid.iso_weekday_of_jan1();

        // Column count follows directly from the anchor and year length
        let expected_weeks =
            usize::try_from((i64::try_from(anchor).unwrap() + days + 6) / 7).unwrap();
        assert_eq!(grid.total_weeks(), expected_weeks, "year {year}");

        // Exactly the year's dates are populated, nothing else
        let populated = i64::try_from(grid.iter_dates().count()).unwrap();
        assert_eq!(populated, days, "year {year}");

        // Leading and trailing cells are padding
        let leading = grid.weeks()[0].iter().take_while(|cell| cell.is_none()).count();
        assert_eq!(leading, anchor, "year {year}");
        let last = grid.weeks().last().unwrap();
        let trailing = last.iter().rev().take_while(|cell| cell.is_none()).count();
        let cells = i64::try_from(grid.total_weeks() * 7).unwrap();
        assert_eq!(
            i64::try_from(trailing).unwrap(),
            cells - i64::try_from(anchor).unwrap() - days,
            "year {year}"
        );

        // Every populated cell sits in the row of its own weekday
        for (week_index, week) in grid.weeks().iter().enumerate() {
            for (day_index, cell) in week.iter().enumerate() {
                if let Some(cell_date) = cell {
                    assert_eq!(
                        iso_weekday(*cell_date),
                        day_index,
                        "year {year} week {week_index}"
                    );
                }
            }
        }

        assert!(grid.check_invariants().is_ok(), "year {year}");
    }
}

#[test]
fn test_year_starting_on_sunday_pads_first_week() {
    // Jan 1 2023 fell on a Sunday, the worst-case leading padding
    let grid = YearGrid::build(2023).unwrap();
    assert_eq!(grid.iso_weekday_of_jan1(), 6);

    let first = &grid.weeks()[0];
    assert!(first[..6].iter().all(Option::is_none));
    assert_eq!(first[6], Some(date(2023, 1, 1)));

    // 6 + 365 = 371 = 53 weeks exactly, so the last column is full
    assert_eq!(grid.total_weeks(), 53);
    let last = grid.weeks().last().unwrap();
    assert!(last.iter().all(Option::is_some));
    assert_eq!(last[6], Some(date(2023, 12, 31)));
}

#[test]
fn test_year_starting_on_monday_has_no_leading_padding() {
    // Jan 1 2024 fell on a Monday
    let grid = YearGrid::build(2024).unwrap();
    assert_eq!(grid.iso_weekday_of_jan1(), 0);
    assert_eq!(grid.weeks()[0][0], Some(date(2024, 1, 1)));
    assert_eq!(grid.total_weeks(), 53);

    // Leap year ends on a Tuesday, leaving five trailing padding cells
    let last = grid.weeks().last().unwrap();
    assert_eq!(last[1], Some(date(2024, 12, 31)));
    assert!(last[2..].iter().all(Option::is_none));
}

#[test]
fn test_days_in_year_handles_leap_rules() {
    assert_eq!(days_in_year(2024).unwrap(), 366);
    assert_eq!(days_in_year(2023).unwrap(), 365);
    // Century years are only leap when divisible by 400
    assert_eq!(days_in_year(1900).unwrap(), 365);
    assert_eq!(days_in_year(2000).unwrap(), 366);
}

#[test]
fn test_out_of_range_years_are_rejected() {
    for year in [0, -1, 10_000] {
        let result = YearGrid::build(year);
        assert!(matches!(result, Err(EngineError::InvalidYear { year: y }) if y == year));
    }
    assert!(days_in_year(0).is_err());
}

#[test]
fn test_build_is_deterministic() {
    let first = YearGrid::build(2024).unwrap();
    let second = YearGrid::build(2024).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cell_accessor_bounds() {
    let grid = YearGrid::build(2024).unwrap();
    assert_eq!(grid.cell(0, 0), Some(date(2024, 1, 1)));
    // Padding cell in the final week
    assert_eq!(grid.cell(52, 6), None);
    // Out-of-bounds indices are None, not a panic
    assert_eq!(grid.cell(99, 0), None);
    assert_eq!(grid.cell(0, 99), None);
}

#[test]
fn test_iter_dates_is_ascending_and_complete() {
    let grid = YearGrid::build(2023).unwrap();
    let dates: Vec<NaiveDate> = grid.iter_dates().collect();
    assert_eq!(dates.len(), 365);
    assert_eq!(dates.first(), Some(&date(2023, 1, 1)));
    assert_eq!(dates.last(), Some(&date(2023, 12, 31)));
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_iso_weekday_and_week_start() {
    // 2024-03-15 was a Friday
    assert_eq!(iso_weekday(date(2024, 3, 15)), 4);
    assert_eq!(week_start(date(2024, 3, 15)), Some(date(2024, 3, 11)));
    // A Monday is its own week start
    assert_eq!(week_start(date(2024, 3, 11)), Some(date(2024, 3, 11)));
    // Sunday belongs to the week that began six days earlier
    assert_eq!(week_start(date(2024, 3, 17)), Some(date(2024, 3, 11)));
}

#[test]
fn test_grid_serializes_round_trip() {
    let grid = YearGrid::build(2024).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let back: YearGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
}
