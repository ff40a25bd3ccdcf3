// ABOUTME: Shared fixture generators for the heat-map benchmark suite
// ABOUTME: Produces deterministic session and override batches for Criterion runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

//! Shared fixtures for the heat-map benchmarks.
//!
//! Session and override batches are generated from index arithmetic so every
//! run measures identical inputs.

pub mod fixtures;
