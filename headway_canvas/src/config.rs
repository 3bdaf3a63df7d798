// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

use headway_store::PositionMap;

/// Debounce delay applied to position saves, in milliseconds.
pub const DEFAULT_SAVE_DELAY_MS: u64 = 500;

/// How a canvas session sources and persists layout edits.
///
/// Edit mode is for authoring: dragging is enabled and overrides load
/// from and save back to the session's storage. With edit mode off the
/// map is frozen for presenting, renders only the committed layout, and
/// never writes position data.
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    /// Whether layout editing (dragging, scaling, edge edits) is live.
    pub edit_mode: bool,
    /// Overrides promoted to a committed default layout, applied under
    /// any session overrides.
    pub committed_positions: Option<PositionMap>,
    /// Quiet period before dirty positions are saved.
    pub save_delay_ms: u64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            edit_mode: true,
            committed_positions: None,
            save_delay_ms: DEFAULT_SAVE_DELAY_MS,
        }
    }
}

impl CanvasConfig {
    /// A frozen presentation-mode configuration over a committed layout.
    pub fn presentation(committed_positions: Option<PositionMap>) -> Self {
        Self {
            edit_mode: false,
            committed_positions,
            save_delay_ms: DEFAULT_SAVE_DELAY_MS,
        }
    }
}
