// ABOUTME: Rendering theme flag consumed by color resolution
// ABOUTME: Distinguishes light and dark hosts so empty cells keep contrast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tatami Training Analytics

use serde::{Deserialize, Serialize};

/// Rendering theme of the hosting dashboard
///
/// Only the no-activity cell color differs between themes; the positive
/// activity ramp is shared. The engine never observes ambient theme state:
/// the host passes the current theme explicitly and re-invokes the engine
/// when it changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light dashboard background
    #[default]
    Light,
    /// Dark dashboard background
    Dark,
}
