// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_store --heading-base-level=0

//! Headway Store: persistence for rearranged maps.
//!
//! A metro map invites rearranging, and rearrangements deserve to
//! survive a restart. This crate persists the three kinds of edits a
//! presenter makes, each as versioned JSON under a well-known key:
//!
//! - Dragged node positions ([`save_positions`] / [`load_positions`]),
//!   plus [`export_positions`] for promoting a session's layout to a
//!   committed default and [`parse_committed`] for reading one back.
//! - Per-slide presenter notes and attached links ([`SlideNotes`],
//!   [`save_notes`] / [`load_notes`]).
//! - Edge additions and deletions relative to the generated map
//!   ([`EdgeEdits`], [`save_edge_edits`] / [`load_edge_edits`]).
//!
//! Storage itself is a seam: the [`Storage`] trait is a flat key-value
//! store, with [`MemoryStorage`] for tests and ephemeral sessions and
//! [`DirStorage`] for a directory of JSON files. [`Debounce`] rounds the
//! crate out by coalescing save bursts without owning a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_store::{Debounce, MemoryStorage, NodePosition, PositionMap};
//! use headway_store::{load_positions, save_positions};
//!
//! let mut storage = MemoryStorage::new();
//! let mut positions = PositionMap::new();
//! positions.insert("metro-slide-03".into(), NodePosition::at(660.0, 350.0));
//!
//! // Coalesce a burst of drags into a single save.
//! let mut debounce = Debounce::new(500);
//! debounce.mark(1_000);
//! debounce.mark(1_200);
//! assert!(!debounce.poll(1_400));
//! if debounce.poll(1_700) {
//!     save_positions(&mut storage, &positions, 1_700).unwrap();
//! }
//!
//! assert_eq!(load_positions(&storage).unwrap(), Some(positions));
//! ```
//!
//! ## Design notes
//!
//! - Backends are dumb byte shuttles; envelopes, versioning, and
//!   validation live above the [`Storage`] seam so every backend
//!   behaves identically.
//! - Malformed payloads load as `None` with a logged warning. One bad
//!   write must never wedge startup, matching how the map treats any
//!   other missing persistence.
//! - Nothing here reads a clock. Callers stamp envelopes and drive
//!   [`Debounce`] with the same timestamps, which keeps saves
//!   deterministic and tests free of sleeps.

mod debounce;
mod edge_edits;
mod notes;
mod positions;
mod storage;

pub use debounce::Debounce;
pub use edge_edits::{
    EDGE_EDITS_KEY, EdgeEdits, StoredEdge, clear_edge_edits, load_edge_edits, save_edge_edits,
};
pub use notes::{CustomResource, SlideNotes, load_notes, notes_key, save_notes};
pub use positions::{
    NodePosition, POSITIONS_KEY, PositionMap, clear_positions, export_positions, load_positions,
    parse_committed, save_positions,
};
pub use storage::{DirStorage, MemoryStorage, Storage, StoreError};
