// ABOUTME: Activity thresholds and color bucket resolution for heat-map cells
// ABOUTME: Maps hours to a bucket index and a hex color, with a per-theme empty-cell color
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Activity palette
//!
//! An hours value resolves to the greatest threshold at or below it; that
//! bucket picks a color from an ascending green ramp shared by both themes.
//! Zero hours is special: rather than the faintest ramp green, an empty
//! cell renders in a dedicated no-activity color that differs per theme so
//! the grid keeps contrast on dark backgrounds. Zero and near-zero hours
//! therefore share a bucket *index* and differ only in resolved color.
//!
//! Resolution is pure. Hosts that memoize resolved colors key their cache
//! on a theme-version token (see the view builder); the palette itself
//! neither sees nor needs it.

use serde::Serialize;

use tatami_core::constants::palette::{
    ACTIVITY_RAMP, DEFAULT_THRESHOLDS, ZERO_ACTIVITY_DARK, ZERO_ACTIVITY_LIGHT,
};
use tatami_core::errors::{EngineError, EngineResult};
use tatami_core::models::Theme;

/// Validated activity thresholds and their colors
///
/// Construction validates the configuration once, so resolution never has
/// an error path. The default palette carries the product's thresholds
/// `[0, 0.5, 1.5, 2.5, 3.5]` hours and its green ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPalette {
    thresholds: Vec<f64>,
    ramp: Vec<String>,
    zero_light: String,
    zero_dark: String,
}

impl Default for HeatPalette {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            ramp: ACTIVITY_RAMP.iter().map(|&color| color.to_owned()).collect(),
            zero_light: ZERO_ACTIVITY_LIGHT.to_owned(),
            zero_dark: ZERO_ACTIVITY_DARK.to_owned(),
        }
    }
}

impl HeatPalette {
    /// Build a custom palette
    ///
    /// `thresholds` must start at exactly zero and ascend strictly;
    /// `ramp` supplies one color per threshold, faintest first.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPalette` when the threshold list is
    /// empty, does not start at zero, is not strictly ascending and finite,
    /// or does not match the ramp length.
    pub fn new(
        thresholds: Vec<f64>,
        ramp: Vec<String>,
        zero_light: impl Into<String>,
        zero_dark: impl Into<String>,
    ) -> EngineResult<Self> {
        let Some(first) = thresholds.first() else {
            return Err(EngineError::InvalidPalette("thresholds must not be empty"));
        };
        if *first != 0.0 {
            return Err(EngineError::InvalidPalette("first threshold must be zero"));
        }
        let ascending = thresholds
            .windows(2)
            .all(|pair| pair[0].is_finite() && pair[1].is_finite() && pair[0] < pair[1]);
        if !ascending {
            return Err(EngineError::InvalidPalette(
                "thresholds must be finite and strictly ascending",
            ));
        }
        if ramp.len() != thresholds.len() {
            return Err(EngineError::InvalidPalette(
                "ramp must provide one color per threshold",
            ));
        }
        Ok(Self {
            thresholds,
            ramp,
            zero_light: zero_light.into(),
            zero_dark: zero_dark.into(),
        })
    }

    /// Bucket index for an hours value: the greatest threshold at or below it
    ///
    /// Non-decreasing in `hours`; values below the first threshold (clamped
    /// negatives, NaN) fall into bucket 0.
    #[must_use]
    pub fn bucket_index(&self, hours: f64) -> usize {
        self.thresholds
            .iter()
            .rposition(|threshold| *threshold <= hours)
            .unwrap_or(0)
    }

    /// Resolved hex color for an hours value under a theme
    ///
    /// Zero hours yields the theme's no-activity color; positive hours use
    /// the shared ramp, so the same training day renders identically in
    /// both themes.
    #[must_use]
    pub fn color_for(&self, hours: f64, theme: Theme) -> &str {
        if hours > 0.0 {
            &self.ramp[self.bucket_index(hours)]
        } else {
            self.zero_color(theme)
        }
    }

    /// The no-activity cell color for a theme
    #[must_use]
    pub fn zero_color(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.zero_light,
            Theme::Dark => &self.zero_dark,
        }
    }

    /// The threshold list, ascending
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.thresholds.len()
    }

    /// Legend swatches: each threshold sample paired with its resolved color
    ///
    /// The first sample is zero, so the legend's leading box shows the
    /// theme's empty-cell color, then the ramp from faint to deep.
    #[must_use]
    pub fn legend(&self, theme: Theme) -> Vec<(f64, &str)> {
        self.thresholds
            .iter()
            .map(|&sample| (sample, self.color_for(sample, theme)))
            .collect()
    }
}
