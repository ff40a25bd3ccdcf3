// ABOUTME: Assembled per-year heat-map view handed to the rendering layer
// ABOUTME: Builder that runs aggregation, grid, labels, summary, and year range in one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Year view assembly
//!
//! A rendering layer needs five things for one displayed year: the merged
//! daily hours, the grid, the month labels, a short summary line, and the
//! navigable year list. [`HeatMapBuilder`] computes them in one call so the
//! host re-renders from a single value. The builder takes *today* as an
//! explicit date — the engine never reads the clock — and threads an opaque
//! theme-version token through for hosts that memoize resolved colors.

use chrono::{Datelike, NaiveDate, TimeZone};
use serde::Serialize;
use tracing::debug;

use tatami_core::constants::limits::{MAX_GRID_YEAR, MIN_GRID_YEAR};
use tatami_core::errors::{EngineError, EngineResult};
use tatami_core::models::{DailyHoursMap, ManualHoursOverride, Theme, TrainingSession};

use crate::aggregate::{apply_overrides, round_to_tenth, session_daily_hours};
use crate::grid::YearGrid;
use crate::month_labels::{place_month_labels, MonthLabel};
use crate::palette::HeatPalette;
use crate::years::available_years;

/// Summary line for one displayed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearSummary {
    /// Hours trained in the year, rounded to one decimal for display
    pub total_hours: f64,
    /// Dates in the year with strictly positive hours
    pub active_days: usize,
}

impl YearSummary {
    /// Summarize one year of a daily hours map
    ///
    /// Only date keys inside the year count, matching the "trained in
    /// {year}" caption the dashboard renders next to it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidYear` when the year is outside the
    /// supported range.
    pub fn for_year(daily_hours: &DailyHoursMap, year: i32) -> EngineResult<Self> {
        if !(MIN_GRID_YEAR..=MAX_GRID_YEAR).contains(&year) {
            return Err(EngineError::InvalidYear { year });
        }
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(EngineError::InvalidYear { year })?;
        let dec31 =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(EngineError::InvalidYear { year })?;

        let mut total_hours = 0.0;
        let mut active_days = 0_usize;
        for (_, hours) in daily_hours.range(jan1..=dec31) {
            total_hours += hours;
            if hours > 0.0 {
                active_days += 1;
            }
        }
        Ok(Self {
            total_hours: round_to_tenth(total_hours),
            active_days,
        })
    }
}

/// Builder for a [`YearHeatMap`]
///
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use tatami_heatmap::view::HeatMapBuilder;
/// use tatami_heatmap::Theme;
///
/// # fn main() -> tatami_heatmap::EngineResult<()> {
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
/// let view = HeatMapBuilder::new(2024, today)
///     .with_theme(Theme::Dark)
///     .with_theme_version(3)
///     .build(&[], &[], &Utc)?;
/// assert_eq!(view.grid.total_weeks(), 53);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HeatMapBuilder {
    year: i32,
    today: NaiveDate,
    theme: Theme,
    theme_version: u64,
    palette: HeatPalette,
}

impl HeatMapBuilder {
    /// Start a builder for a displayed year
    ///
    /// `today` anchors the navigable year range; it is passed in rather
    /// than read from a clock so the engine stays pure.
    #[must_use]
    pub fn new(year: i32, today: NaiveDate) -> Self {
        Self {
            year,
            today,
            theme: Theme::default(),
            theme_version: 0,
            palette: HeatPalette::default(),
        }
    }

    /// Set the rendering theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the opaque theme-version token echoed on the view
    ///
    /// Hosts that memoize resolved colors bump this counter on theme
    /// switches to invalidate their cache; the engine only carries it.
    #[must_use]
    pub fn with_theme_version(mut self, theme_version: u64) -> Self {
        self.theme_version = theme_version;
        self
    }

    /// Replace the default activity palette
    #[must_use]
    pub fn with_palette(mut self, palette: HeatPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Assemble the full view for the displayed year
    ///
    /// Runs aggregation, grid construction, month label placement, the
    /// year summary, and the navigable year range. The navigable range is
    /// derived from session dates only — overridden dates with no sessions
    /// do not widen it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidYear` for years outside the supported
    /// range, or `EngineError::Internal` if the grid fails its placement
    /// post-condition.
    pub fn build<Tz: TimeZone>(
        &self,
        sessions: &[TrainingSession],
        overrides: &[ManualHoursOverride],
        tz: &Tz,
    ) -> EngineResult<YearHeatMap> {
        let mut daily_hours = session_daily_hours(sessions, tz);
        let years = available_years(daily_hours.years(), self.today.year(), self.year);
        apply_overrides(&mut daily_hours, overrides);

        let grid = YearGrid::build(self.year)?;
        let month_labels = place_month_labels(&grid)?;
        let summary = YearSummary::for_year(&daily_hours, self.year)?;

        debug!(
            year = self.year,
            days = daily_hours.len(),
            total_hours = summary.total_hours,
            "assembled year heat-map view"
        );
        Ok(YearHeatMap {
            year: self.year,
            theme: self.theme,
            theme_version: self.theme_version,
            palette: self.palette.clone(),
            daily_hours,
            grid,
            month_labels,
            summary,
            available_years: years,
        })
    }
}

/// Everything the rendering layer needs for one displayed year
///
/// A fresh value per build; the host discards and rebuilds it on any input
/// change (new session, override set or cleared, year navigation, theme
/// switch).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearHeatMap {
    /// Displayed year
    pub year: i32,
    /// Theme the colors resolve under
    pub theme: Theme,
    /// Opaque cache token echoed from the builder
    pub theme_version: u64,
    /// Palette used for color resolution
    pub palette: HeatPalette,
    /// Merged date-to-hours mapping, overrides applied
    pub daily_hours: DailyHoursMap,
    /// Week-by-weekday cell layout
    pub grid: YearGrid,
    /// Twelve header labels in calendar order
    pub month_labels: Vec<MonthLabel>,
    /// Total hours and active days for the displayed year
    pub summary: YearSummary,
    /// Years offered for navigation, descending
    pub available_years: Vec<i32>,
}

impl YearHeatMap {
    /// Hours for a date, zero when nothing was recorded
    #[must_use]
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.daily_hours.hours_on(date)
    }

    /// Resolved cell color at a grid position, `None` on padding cells
    #[must_use]
    pub fn color_at(&self, week_index: usize, day_index: usize) -> Option<&str> {
        self.grid.cell(week_index, day_index).map(|date| {
            self.palette
                .color_for(self.daily_hours.hours_on(date), self.theme)
        })
    }

    /// Resolved color for an arbitrary hours value under the view's theme
    #[must_use]
    pub fn color_for_hours(&self, hours: f64) -> &str {
        self.palette.color_for(hours, self.theme)
    }

    /// Legend swatches under the view's theme, empty color first
    #[must_use]
    pub fn legend(&self) -> Vec<(f64, &str)> {
        self.palette.legend(self.theme)
    }
}
