// ABOUTME: Main library entry point for the Tatami heat-map engine
// ABOUTME: Turns raw training sessions and manual overrides into renderable year heat-maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

#![deny(unsafe_code)]

//! # Tatami Heat Map
//!
//! Calendar heat-map grid and aggregation engine for the Tatami training-log
//! dashboard. The engine converts an unordered collection of timestamped
//! training sessions, plus manually entered per-date hour overrides, into
//! everything a rendering layer needs to draw a contribution-style year view.
//!
//! ## Features
//!
//! - **Local-date normalization**: nanosecond instants become local calendar
//!   dates, so a session logged near midnight lands on the right day
//! - **Override-aware aggregation**: manual hours replace session-derived
//!   hours for their date, never sum with them
//! - **ISO-week year grid**: a dense week-by-weekday grid with Monday rows,
//!   padded before Jan 1 and after Dec 31
//! - **Month labels**: column placement and span for the twelve header labels
//! - **Theme-aware coloring**: discrete activity buckets over a shared green
//!   ramp, with a per-theme no-activity color
//! - **Calendar analytics**: month calendar grids, trailing volume buckets,
//!   and weekly training streaks
//!
//! ## Architecture
//!
//! Every computation is a pure synchronous function over immutable inputs:
//! no I/O, no ambient clock or timezone reads, no shared state. Outputs are
//! fresh values on every call; memoization belongs to the hosting UI.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use tatami_heatmap::view::HeatMapBuilder;
//! use tatami_heatmap::{EngineResult, ManualHoursOverride, TrainingSession};
//!
//! fn main() -> EngineResult<()> {
//!     // 2024-03-01T12:00:00Z, 90 minutes on the mat
//!     let sessions = vec![TrainingSession::new("s-1", 1_709_294_400_000_000_000, 90)];
//!     let overrides: Vec<ManualHoursOverride> = Vec::new();
//!     let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default();
//!
//!     let view = HeatMapBuilder::new(2024, today).build(&sessions, &overrides, &Utc)?;
//!     assert_eq!(view.summary.total_hours, 1.5);
//!     Ok(())
//! }
//! ```

/// Session and override merging into the canonical daily hours map
pub mod aggregate;

/// Year grid construction anchored by ISO weekday
pub mod grid;

/// Logging configuration and structured logging setup
pub mod logging;

/// Monday-anchored month calendar grids and per-date session grouping
pub mod month_calendar;

/// Month label column placement for the grid header
pub mod month_labels;

/// Timestamp normalization from raw instants to local calendar dates
pub mod normalize;

/// Activity thresholds, color buckets, and theme handling
pub mod palette;

/// Weekly training streak calculation
pub mod streaks;

/// Assembled per-year heat-map view for the rendering layer
pub mod view;

/// Trailing week and month training volume buckets
pub mod volume;

/// Year navigation range and stepping
pub mod years;

// Re-export the foundation crate's surface so downstream callers (and this
// crate's tests) need only one dependency.
pub use tatami_core::constants;
pub use tatami_core::errors::{EngineError, EngineResult};
pub use tatami_core::models::{DailyHoursMap, ManualHoursOverride, Theme, TrainingSession};
