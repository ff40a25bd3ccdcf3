// ABOUTME: Timestamp normalization from raw nanosecond instants to calendar date keys
// ABOUTME: Resolves instants in a caller-supplied timezone so midnight sessions land on the right day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Timestamp normalization
//!
//! Session records carry their instant in the source system's minimal time
//! unit, nanoseconds since the Unix epoch. The heat-map keys everything by
//! **local** calendar date: a session logged at 23:30 belongs to the evening
//! it happened, not to the following UTC day. The timezone is an explicit
//! parameter rather than an ambient read, which keeps normalization a pure
//! function and lets tests pin any zone they like.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use tatami_core::constants::time::NANOS_PER_MILLISECOND;
use tatami_core::errors::{EngineError, EngineResult};

/// Convert a raw nanosecond instant into a calendar date key in `tz`
///
/// The instant is truncated to milliseconds (matching the source system's
/// integer coercion) before the zone conversion. Pre-epoch instants are
/// rejected: nobody logged a training session before 1970, so a negative
/// value means corrupt data rather than an old record.
///
/// # Errors
///
/// Returns `EngineError::InvalidTimestamp` when the instant is negative or
/// does not resolve to a representable date.
pub fn date_key<Tz: TimeZone>(nanos: i64, tz: &Tz) -> EngineResult<NaiveDate> {
    if nanos < 0 {
        return Err(EngineError::InvalidTimestamp { nanos });
    }
    let millis = nanos / NANOS_PER_MILLISECOND;
    let instant = DateTime::from_timestamp_millis(millis)
        .ok_or(EngineError::InvalidTimestamp { nanos })?;
    Ok(instant.with_timezone(tz).date_naive())
}

/// Convert a raw nanosecond instant into a date key in the system timezone
///
/// Convenience wrapper for hosts that do run in the user's local zone; the
/// engine itself always goes through [`date_key`].
///
/// # Errors
///
/// Returns `EngineError::InvalidTimestamp` when the instant is negative or
/// does not resolve to a representable date.
pub fn date_key_local(nanos: i64) -> EngineResult<NaiveDate> {
    date_key(nanos, &Local)
}
