// ABOUTME: Canonical date-to-hours mapping produced by aggregation
// ABOUTME: Ordered map wrapper with additive accumulation, replacement, and range queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::RangeBounds;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical mapping from calendar date to trained hours
///
/// Backed by an ordered map so iteration order is deterministic and date
/// ranges (a year, a month, a trailing window) can be walked without
/// scanning the whole map. Values are kept non-negative by the aggregation
/// layer; the map itself never rejects a value.
///
/// A `DailyHoursMap` is a recomputed value, not a persisted entity: it is
/// rebuilt wholesale from source records on every relevant input change and
/// holds no state between computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyHoursMap {
    entries: BTreeMap<NaiveDate, f64>,
}

impl DailyHoursMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate hours onto a date, summing with any existing value
    pub fn add(&mut self, date: NaiveDate, hours: f64) {
        *self.entries.entry(date).or_insert(0.0) += hours;
    }

    /// Set the hours for a date, replacing any existing value
    pub fn set(&mut self, date: NaiveDate, hours: f64) {
        self.entries.insert(date, hours);
    }

    /// Hours recorded for a date, if any
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries.get(&date).copied()
    }

    /// Hours for a date, defaulting to zero for dates with no record
    #[must_use]
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.get(date).unwrap_or(0.0)
    }

    /// Number of dates with a recorded value
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no dates at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all entries in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.entries.iter().map(|(date, hours)| (*date, *hours))
    }

    /// Iterate the entries whose date falls inside `range`, ascending
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (NaiveDate, f64)> + '_
    where
        R: RangeBounds<NaiveDate>,
    {
        self.entries.range(range).map(|(date, hours)| (*date, *hours))
    }

    /// Sum of all recorded hours
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Number of dates with strictly positive hours
    ///
    /// A date carrying an explicit zero (e.g. a cleared-down override) is
    /// present in the map but does not count as active.
    #[must_use]
    pub fn active_days(&self) -> usize {
        self.entries.values().filter(|hours| **hours > 0.0).count()
    }

    /// Distinct years present in the map, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.entries.keys().map(Datelike::year).collect();
        years.dedup();
        years
    }
}

impl<'a> IntoIterator for &'a DailyHoursMap {
    type Item = (&'a NaiveDate, &'a f64);
    type IntoIter = btree_map::Iter<'a, NaiveDate, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
