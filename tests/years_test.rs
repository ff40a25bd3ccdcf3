// ABOUTME: Unit tests for year navigation
// ABOUTME: Validates the navigable year union and forward/backward stepping bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tatami_heatmap::years::{available_years, next_year, previous_year};

#[test]
fn test_union_is_descending_and_distinct() {
    let years = available_years(vec![2022, 2024, 2022], 2025, 2020);
    assert_eq!(years, vec![2025, 2024, 2022, 2020]);
}

#[test]
fn test_no_data_still_offers_current_and_displayed() {
    let years = available_years(std::iter::empty(), 2025, 2025);
    assert_eq!(years, vec![2025]);

    let years = available_years(std::iter::empty(), 2025, 2019);
    assert_eq!(years, vec![2025, 2019]);
}

#[test]
fn test_displayed_year_already_in_data_is_not_duplicated() {
    let years = available_years(vec![2023, 2024], 2024, 2023);
    assert_eq!(years, vec![2024, 2023]);
}

#[test]
fn test_next_year_stops_at_current() {
    assert_eq!(next_year(2023, 2025), Some(2024));
    assert_eq!(next_year(2024, 2025), Some(2025));
    assert_eq!(next_year(2025, 2025), None);
    // Displayed beyond current (stale clock) cannot advance further
    assert_eq!(next_year(2026, 2025), None);
}

#[test]
fn test_previous_year_stops_at_minimum() {
    assert_eq!(previous_year(2025), Some(2024));
    assert_eq!(previous_year(2), Some(1));
    assert_eq!(previous_year(1), None);
}
