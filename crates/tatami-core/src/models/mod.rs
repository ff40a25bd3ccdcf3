// ABOUTME: Core data models for the Tatami heat-map engine
// ABOUTME: Re-exports TrainingSession, ManualHoursOverride, DailyHoursMap, and Theme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! # Data Models
//!
//! Core data structures consumed and produced by the heat-map engine.
//!
//! ## Design Principles
//!
//! - **Collaborator Agnostic**: The engine receives plain in-memory
//!   collections; storage and transport stay outside this crate.
//! - **Serializable**: All models support JSON serialization for the
//!   rendering layer.
//! - **Type Safe**: Calendar dates are `chrono::NaiveDate`, never strings.
//!
//! ## Core Models
//!
//! - `TrainingSession`: one logged session with a raw nanosecond instant
//! - `ManualHoursOverride`: a per-date hours value that replaces
//!   session-derived hours
//! - `DailyHoursMap`: the canonical date-to-hours mapping
//! - `Theme`: light/dark rendering flag for color resolution

// Domain modules
mod daily_hours;
mod session;
mod theme;

// Re-export all public types for convenience
pub use daily_hours::DailyHoursMap;
pub use session::{ManualHoursOverride, TrainingSession};
pub use theme::Theme;
