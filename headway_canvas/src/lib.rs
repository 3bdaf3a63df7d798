// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_canvas --heading-base-level=0

//! Headway Canvas: the interactive map session.
//!
//! This crate ties the other Headway pieces into one stateful session,
//! [`MetroCanvas`]: it generates the metro layout for a deck, applies
//! committed and stored position overrides, runs presentation
//! navigation, expands stops into their content fans, and persists
//! edits through a [`Storage`](headway_store::Storage) backend.
//!
//! The canvas is headless. A host owns the window, the renderer, and
//! the clock; it feeds pointer, key, and viewport events in, reads the
//! current [`nodes`](MetroCanvas::nodes) and
//! [`edges`](MetroCanvas::edges) out, and drains
//! [`take_viewport_requests`](MetroCanvas::take_viewport_requests) to
//! animate its own camera.
//!
//! [`CanvasConfig`] decides the session's stance: edit mode loads and
//! saves layout overrides, while presentation mode freezes the map to
//! its committed layout and refuses every mutation.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_canvas::{CanvasConfig, MetroCanvas};
//! use headway_content::{bundled_deck, bundled_topology};
//! use headway_nav::FitOptions;
//! use headway_store::MemoryStorage;
//! use kurbo::Point;
//!
//! let mut canvas = MetroCanvas::new(
//!     bundled_deck(),
//!     bundled_topology(),
//!     MemoryStorage::new(),
//!     CanvasConfig::default(),
//! )
//! .unwrap();
//!
//! // Clicking a stop navigates there and asks the host for a close-up.
//! assert!(canvas.on_stop_clicked("metro-slide-01"));
//! let requests = canvas.take_viewport_requests();
//! assert_eq!(requests[0].options, FitOptions::CLOSE_UP);
//!
//! // Drags accumulate into overrides; the debounce saves them later.
//! assert!(canvas.begin_drag("metro-slide-01", Point::ZERO));
//! canvas.drag_to(Point::new(24.0, 0.0), 100);
//! canvas.end_drag(120);
//! assert!(canvas.tick(620).unwrap());
//! ```
//!
//! ## Design notes
//!
//! - The session is clockless like the store beneath it. Hosts pass
//!   millisecond timestamps into [`drag_to`](MetroCanvas::drag_to),
//!   [`tick`](MetroCanvas::tick), and friends, so a test can replay a
//!   whole editing session without a single sleep.
//! - Edit gating lives here, not in the store. Presentation mode never
//!   reads session overrides and refuses drags, scales, and edge
//!   edits, so a stray event handler cannot dirty a committed layout.
//! - A stop's expansion is an overlay. [`nodes`](MetroCanvas::nodes)
//!   and [`edges`](MetroCanvas::edges) append the fan after the base
//!   layout, so collapsing it never has to undo anything.

mod canvas;
mod config;
mod drag;

pub use canvas::{MAX_ZOOM, MIN_ZOOM, MetroCanvas};
pub use config::{CanvasConfig, DEFAULT_SAVE_DELAY_MS};
