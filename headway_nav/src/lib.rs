// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_nav --heading-base-level=0

//! Headway Nav: track-aware navigation over a branching slide map.
//!
//! A deck laid out as a metro map does not read top to bottom. Lines fork,
//! run in parallel, and rejoin, so "next slide" has to follow the track a
//! rider is actually on. This crate derives that traversal from the same
//! declarative topology the layout uses:
//!
//! - [`NavGraph`]: one `previous`/`next` pair per slide ([`NavLinks`]),
//!   built by [`NavGraph::build`] from a deck and its topology. Within a
//!   section, slides chain in order; across sections, the link roles
//!   decide which connector `next` follows and which one `previous`
//!   returns along.
//! - [`NavController`]: the presentation state machine. It tracks the
//!   current slide and overview mode, applies navigation operations, and
//!   emits [`ViewportRequest`] values into an outbox instead of calling
//!   into any renderer.
//! - [`NavKey`] / [`NavCommand`]: a small keyboard vocabulary and its
//!   translation into controller operations, kept separate so the
//!   controller stays agnostic to input modality.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_content::{bundled_deck, bundled_topology};
//! use headway_nav::{NavController, NavGraph};
//!
//! let deck = bundled_deck();
//! let topology = bundled_topology();
//!
//! let graph = NavGraph::build(&deck, &topology);
//! // Stepping off the fork section follows the main line.
//! assert_eq!(graph.next_of("slide-06"), Some("slide-07"));
//! // The technical track's first stop points back at the fork.
//! assert_eq!(graph.previous_of("slide-16"), Some("slide-06"));
//!
//! let mut nav = NavController::new(&deck, &topology);
//! assert_eq!(nav.current_slide(), Some("slide-01"));
//! nav.go_to_next();
//! assert_eq!(nav.current_slide(), Some("slide-02"));
//! // The move queued a viewport-centering request for the host to drain.
//! assert_eq!(nav.take_requests().len(), 1);
//! ```
//!
//! ## Design notes
//!
//! - The graph is a plain mapping, not a general graph structure: exactly
//!   one `next` and one `previous` per slide, chosen by link-role policy.
//!   Dead ends are `None`, surfaced upstream as disabled affordances.
//! - Viewport changes are data ([`ViewportRequest`] with [`FitOptions`]),
//!   drained by the host via [`NavController::take_requests`]. The
//!   controller also maintains the one-shot settle suppression that keeps
//!   programmatic moves from fighting the host's settle callbacks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod graph;
mod keymap;

pub use controller::{FitOptions, NavController, ViewportRequest, ViewportTarget};
pub use graph::{NavGraph, NavLinks};
pub use keymap::{NavCommand, NavKey};
