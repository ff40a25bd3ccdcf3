// ABOUTME: Unit tests for core data models
// ABOUTME: Validates session records, overrides, themes, and the daily hours map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use tatami_heatmap::{DailyHoursMap, ManualHoursOverride, Theme, TrainingSession};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Test data for creating a sample session
fn create_sample_session() -> TrainingSession {
    TrainingSession::new("session-1", 1_709_294_400_000_000_000, 90)
}

#[test]
fn test_training_session_creation() {
    let session = create_sample_session();
    assert_eq!(session.id, "session-1");
    assert_eq!(session.date, 1_709_294_400_000_000_000);
    assert_eq!(session.duration_minutes, 90);
}

#[test]
fn test_training_session_serialization() {
    let session = create_sample_session();
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["id"], "session-1");
    assert_eq!(json["duration_minutes"], 90);

    let back: TrainingSession = serde_json::from_value(json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn test_override_creation_and_serialization() {
    let entry = ManualHoursOverride::new(date(2024, 3, 1), 5.0);
    assert_eq!(entry.date, date(2024, 3, 1));
    assert!((entry.hours - 5.0).abs() < f64::EPSILON);

    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["date"], "2024-03-01");
}

#[test]
fn test_theme_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Theme::Light).unwrap(), "light");
    assert_eq!(serde_json::to_value(Theme::Dark).unwrap(), "dark");
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn test_daily_hours_add_accumulates() {
    let mut map = DailyHoursMap::new();
    map.add(date(2024, 3, 1), 1.5);
    map.add(date(2024, 3, 1), 0.5);
    assert!((map.hours_on(date(2024, 3, 1)) - 2.0).abs() < f64::EPSILON);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_daily_hours_set_replaces() {
    let mut map = DailyHoursMap::new();
    map.add(date(2024, 3, 1), 2.0);
    map.set(date(2024, 3, 1), 5.0);
    assert!((map.hours_on(date(2024, 3, 1)) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_daily_hours_missing_date_defaults_to_zero() {
    let map = DailyHoursMap::new();
    assert_eq!(map.get(date(2024, 3, 1)), None);
    assert!(map.hours_on(date(2024, 3, 1)).abs() < f64::EPSILON);
    assert!(map.is_empty());
}

#[test]
fn test_daily_hours_totals_and_active_days() {
    let mut map = DailyHoursMap::new();
    map.set(date(2024, 3, 1), 2.0);
    map.set(date(2024, 3, 2), 0.0);
    map.set(date(2024, 3, 3), 1.5);
    assert!((map.total_hours() - 3.5).abs() < f64::EPSILON);
    // The explicit zero on the 2nd is stored but not an active day
    assert_eq!(map.active_days(), 2);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_daily_hours_range_is_ordered_and_bounded() {
    let mut map = DailyHoursMap::new();
    map.set(date(2023, 12, 31), 1.0);
    map.set(date(2024, 1, 2), 2.0);
    map.set(date(2024, 1, 10), 3.0);
    map.set(date(2024, 2, 1), 4.0);

    let january: Vec<(NaiveDate, f64)> = map.range(date(2024, 1, 1)..=date(2024, 1, 31)).collect();
    assert_eq!(
        january,
        vec![(date(2024, 1, 2), 2.0), (date(2024, 1, 10), 3.0)]
    );
}

#[test]
fn test_daily_hours_years_are_distinct_and_ascending() {
    let mut map = DailyHoursMap::new();
    map.set(date(2022, 6, 1), 1.0);
    map.set(date(2024, 1, 1), 1.0);
    map.set(date(2024, 5, 9), 1.0);
    assert_eq!(map.years(), vec![2022, 2024]);
}

#[test]
fn test_daily_hours_iteration_is_chronological() {
    let mut map = DailyHoursMap::new();
    map.set(date(2024, 5, 9), 1.0);
    map.set(date(2024, 1, 1), 2.0);
    map.set(date(2024, 3, 7), 3.0);

    let dates: Vec<NaiveDate> = map.iter().map(|(day, _)| day).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 3, 7), date(2024, 5, 9)]
    );
}

#[test]
fn test_daily_hours_serializes_with_date_keys() {
    let mut map = DailyHoursMap::new();
    map.set(date(2024, 3, 1), 2.0);
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json["2024-03-01"], 2.0);

    let back: DailyHoursMap = serde_json::from_value(json).unwrap();
    assert_eq!(back, map);
}
