// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for time conversion, grid limits, palette colors, and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat
//! list, so call sites read as `constants::palette::ACTIVITY_RAMP` and the
//! provenance of each value stays obvious.

/// Time unit conversion constants
pub mod time {
    /// Nanoseconds per millisecond; session instants arrive in nanoseconds
    pub const NANOS_PER_MILLISECOND: i64 = 1_000_000;
    /// Minutes per hour, as f64 for duration-to-hours conversion
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Grid and calendar limits
pub mod limits {
    /// Smallest year the grid will render
    pub const MIN_GRID_YEAR: i32 = 1;
    /// Largest year the grid will render
    pub const MAX_GRID_YEAR: i32 = 9999;
    /// Cells per grid column, one per ISO weekday
    pub const DAYS_PER_WEEK: usize = 7;
    /// Months in a calendar year
    pub const MONTHS_PER_YEAR: u32 = 12;
}

/// Heat-map palette colors and activity thresholds
pub mod palette {
    /// Ascending hour thresholds delimiting the activity buckets
    pub const DEFAULT_THRESHOLDS: [f64; 5] = [0.0, 0.5, 1.5, 2.5, 3.5];
    /// Green ramp for positive activity, faintest to deepest; theme-independent
    pub const ACTIVITY_RAMP: [&str; 5] =
        ["#ecf5dd", "#d6e685", "#8cc665", "#44a340", "#1e6823"];
    /// No-activity cell color in the light theme
    pub const ZERO_ACTIVITY_LIGHT: &str = "#ebedf0";
    /// No-activity cell color in the dark theme
    pub const ZERO_ACTIVITY_DARK: &str = "#333333";
}

/// Month display names
pub mod months {
    /// English three-letter month abbreviations, January first
    pub const ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
}

/// Training streak rules
pub mod streak {
    /// Largest gap in days between sessions that keeps a streak alive
    pub const MAX_GAP_DAYS: i64 = 7;
}

/// Display rounding steps
pub mod rounding {
    /// Steps per hour when rounding to the nearest quarter hour
    pub const QUARTER_HOUR_STEPS: f64 = 4.0;
    /// Steps per hour when rounding to one decimal place
    pub const TENTH_STEPS: f64 = 10.0;
}

/// Service identity for structured logging
pub mod service {
    /// Service name reported in log records
    pub const NAME: &str = "tatami-heatmap";
}
