// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_zoom --heading-base-level=0

//! Headway Zoom: zoom-driven presentation interpolation.
//!
//! Several map elements only earn their pixels once the viewport is close
//! enough: slide subnodes, their connecting arcs, and thumbnail-style
//! previews. This crate holds the pure math that maps a continuous zoom
//! factor to their presentation, so hosts and tests can evaluate it without
//! a renderer:
//!
//! - [`is_revealed`]: whether a zoom-gated element is shown at all.
//! - [`reveal_opacity`]: a linear fade-in over the first
//!   [`FADE_RANGE`] of zoom past [`REVEAL_ZOOM`].
//! - [`thumb_scale`]: a thumbnail growth curve from zero at
//!   [`REVEAL_ZOOM`] up to a cap at [`FULL_ZOOM`], with a smaller cap when
//!   a sibling element already occupies the focus.
//! - [`ZoomPresentation`]: the three of them bundled, with an explicit
//!   expansion override for click-to-expand elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_zoom::{REVEAL_ZOOM, ZoomPresentation, reveal_opacity};
//!
//! // Zoomed out: nothing gated is drawn.
//! let far = ZoomPresentation::at(0.3, false, false);
//! assert!(!far.visible);
//! assert_eq!(far.opacity, 0.0);
//!
//! // Halfway through the fade band.
//! let opacity = reveal_opacity(REVEAL_ZOOM + 0.1);
//! assert!((opacity - 0.5).abs() < 1e-9);
//!
//! // An explicit click overrides the ambient zoom heuristic.
//! let pinned = ZoomPresentation::at(0.3, true, true);
//! assert!(pinned.visible);
//! assert_eq!(pinned.opacity, 1.0);
//! ```
//!
//! ## Design notes
//!
//! - All functions are total over finite zoom values; out-of-band inputs
//!   clamp rather than extrapolate.
//! - Opacity is monotonically non-decreasing in zoom, so fades never
//!   flicker as the viewport settles.
//! - The constants are presentation tuning, not protocol. Hosts that need
//!   different bands should wrap these functions rather than patch them.
//!
//! This crate is `no_std`.

#![no_std]

/// Zoom level at which zoom-gated elements become visible.
pub const REVEAL_ZOOM: f64 = 0.5;

/// Width of the zoom band over which revealed elements fade from
/// transparent to opaque.
pub const FADE_RANGE: f64 = 0.2;

/// Zoom level at which thumbnail-style elements reach their full scale.
pub const FULL_ZOOM: f64 = 1.0;

/// Scale cap for an unconstrained thumbnail at [`FULL_ZOOM`].
pub const THUMB_MAX: f64 = 1.0;

/// Scale cap applied while a sibling element is expanded, keeping the
/// thumbnail from colliding with the expanded content.
pub const THUMB_MAX_CONSTRAINED: f64 = 0.55;

/// Whether zoom-gated elements are shown at `zoom`.
///
/// The boundary is inclusive: at exactly [`REVEAL_ZOOM`] an element is
/// visible with opacity zero, about to fade in.
pub fn is_revealed(zoom: f64) -> bool {
    zoom >= REVEAL_ZOOM
}

/// Opacity of a revealed element at `zoom`, in `[0, 1]`.
///
/// Zero at and below [`REVEAL_ZOOM`], one at and beyond
/// [`REVEAL_ZOOM`]` + `[`FADE_RANGE`], linear in between.
pub fn reveal_opacity(zoom: f64) -> f64 {
    ((zoom - REVEAL_ZOOM) / FADE_RANGE).clamp(0.0, 1.0)
}

/// Scale factor for a thumbnail-style element at `zoom`.
///
/// Zero at and below [`REVEAL_ZOOM`], growing linearly to the cap at
/// [`FULL_ZOOM`] and holding there. The cap is [`THUMB_MAX`], or
/// [`THUMB_MAX_CONSTRAINED`] while `constrained` holds.
pub fn thumb_scale(zoom: f64, constrained: bool) -> f64 {
    let cap = if constrained {
        THUMB_MAX_CONSTRAINED
    } else {
        THUMB_MAX
    };
    ((zoom - REVEAL_ZOOM) / (FULL_ZOOM - REVEAL_ZOOM)).clamp(0.0, 1.0) * cap
}

/// A zoom-gated element's presentation at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPresentation {
    /// Whether the element is rendered at all.
    pub visible: bool,
    /// Render opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor for thumbnail-style elements.
    pub scale: f64,
}

impl ZoomPresentation {
    /// Evaluates the presentation at `zoom`.
    ///
    /// `constrained` selects the smaller thumbnail cap (a sibling is
    /// expanded nearby). `expanded` is the element's own click-to-expand
    /// state: when set it wins over the zoom heuristic and the element is
    /// presented fully opaque at its unconstrained maximum.
    pub fn at(zoom: f64, constrained: bool, expanded: bool) -> Self {
        if expanded {
            return Self {
                visible: true,
                opacity: 1.0,
                scale: THUMB_MAX,
            };
        }
        Self {
            visible: is_revealed(zoom),
            opacity: reveal_opacity(zoom),
            scale: thumb_scale(zoom, constrained),
        }
    }

    /// The fully hidden presentation, as used below [`REVEAL_ZOOM`].
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            scale: 0.0,
        }
    }
}
