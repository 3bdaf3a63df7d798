// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_layout --heading-base-level=0

//! Headway Layout: deterministic metro-map geometry for a slide deck.
//!
//! This crate turns a deck and its section topology into a transit-map
//! scene: slides become stops on colored lines, section links become
//! inter-line connectors, and a handful of decorations (line name
//! plates, landmarks, a river) give the map its character. The output is
//! plain geometry for a host renderer to draw:
//!
//! - [`generate_metro_layout`] produces a [`MetroLayout`], a node and
//!   edge list in paint order. Generation is pure: the same deck and
//!   topology always yield an identical layout, so hosts persist drag
//!   overrides separately and merge them afterwards.
//! - [`VisualNode`] and [`NodeData`] describe positioned elements, from
//!   stops ([`StopData`], including derived junction rings) down to the
//!   backdrop. [`VisualEdge`] and [`EdgeKind`] describe connections and
//!   how to route them.
//! - [`expand_stop`] builds a [`StopExpansion`], the overlay fan of
//!   bullet and resource subnodes shown above a focused stop.
//! - [`geometry`] holds the fixed tables: line colors, section anchors,
//!   label text, landmark positions, and the river course.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_content::{bundled_deck, bundled_topology};
//! use headway_layout::generate_metro_layout;
//!
//! let deck = bundled_deck();
//! let layout = generate_metro_layout(&deck, &bundled_topology());
//!
//! // Stops march right from their section's anchor, one spacing apart.
//! let first = layout.stop_for_slide("slide-01").unwrap();
//! let second = layout.stop_for_slide("slide-02").unwrap();
//! assert_eq!(second.position.x - first.position.x, 280.0);
//!
//! // The stop where the trunk forks is a junction of three lines.
//! let fork = layout.stop_for_slide("slide-06").unwrap();
//! assert_eq!(fork.as_stop().unwrap().junction_colors.len(), 3);
//! ```
//!
//! ## Design notes
//!
//! - Paint order is positional at the bottom of the stack and `z_index`
//!   above it: the backdrop is always the first node and the river spans
//!   lead the edge list, while nodes carry `z_index` for everything a
//!   host reorders dynamically.
//! - Junctions are derived, not authored: a stop with three or more
//!   incident line segments gets a ring of the meeting lines' colors, in
//!   edge list order. Editing the topology updates the rings for free.
//! - Geometry types come from [`kurbo`] and colors from [`peniko`], so
//!   output plugs into that rendering ecosystem without conversion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;
mod expand;
mod metro;
mod node;

pub mod geometry;

pub use edge::{EdgeKind, EdgeStyle, Handle, VisualEdge};
pub use expand::{StopExpansion, expand_stop};
pub use metro::{BACKGROUND_NODE_ID, MetroLayout, generate_metro_layout, stop_node_id};
pub use node::{NodeData, NodeFlags, StopData, SubnodeContent, SubnodeData, VisualNode};
