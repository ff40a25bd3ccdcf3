// ABOUTME: Core types and constants for the Tatami training-log heat-map engine
// ABOUTME: Foundation crate with data models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

#![deny(unsafe_code)]

//! # Tatami Core
//!
//! Foundation crate providing shared types and constants for the Tatami
//! calendar heat-map engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and `EngineResult`
//! - **constants**: Domain constants (time units, year limits, palette colors)
//! - **models**: Core data models (`TrainingSession`, `ManualHoursOverride`,
//!   `DailyHoursMap`, `Theme`)

/// Unified error handling for the heat-map engine
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`TrainingSession`, `DailyHoursMap`, `Theme`, etc.)
pub mod models;
