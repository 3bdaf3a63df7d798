// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=headway_content --heading-base-level=0

//! Headway Content: the declarative content model behind the metro map.
//!
//! This crate holds the data everything else consumes: sections, slides,
//! resources, landmarks, and the [`Topology`] describing how sections feed
//! into one another. It contains no layout or navigation logic; those live in
//! `headway_layout` and `headway_nav` and both read from the same
//! [`Deck`] and [`Topology`] values so they can never disagree about the
//! shape of the map.
//!
//! The model is deliberately small and flat:
//! - A [`Deck`] owns ordered slices of [`Section`], [`Slide`], [`Resource`],
//!   and [`Landmark`] values. Declaration order is meaningful: section order
//!   is the presentation's trunk order, and slide order within a section is
//!   the within-line stop order.
//! - Lookups are linear scans over those slices. Decks are a few dozen
//!   entries; an index would cost more than it saves.
//! - A [`Topology`] is an ordered list of [`SectionLink`]s. Each link names a
//!   source section (with a first/last slide anchor), a target section, a
//!   [`LinkRole`] carrying the traversal policy, and an [`Orientation`] used
//!   only by layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use headway_content::{bundled_deck, bundled_topology};
//!
//! let deck = bundled_deck();
//! let topology = bundled_topology();
//!
//! // The bundled data is internally consistent.
//! assert!(deck.validate(&topology).is_empty());
//!
//! let first = deck.first_slide_in("intro").expect("intro has slides");
//! assert_eq!(first.id, "slide-01");
//!
//! // Slides keep their declaration order within a section.
//! let titles: Vec<_> = deck
//!     .slides_in("understanding")
//!     .map(|slide| slide.title.as_str())
//!     .collect();
//! assert_eq!(titles.len(), 2);
//! ```
//!
//! ## Design notes
//!
//! Referential integrity (a slide naming a section that exists, a resource
//! naming a slide that exists) is an input invariant, not something this
//! crate enforces at construction time. Consumers degrade gracefully when it
//! is violated; [`Deck::validate`] reports the problems as a warning list so
//! applications can log them at startup.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bundled;
mod deck;
mod topology;
mod types;
mod validate;

pub use bundled::{bundled_deck, bundled_topology};
pub use deck::Deck;
pub use topology::{Anchor, LinkRole, Orientation, SectionLink, Topology};
pub use types::{Landmark, Resource, ResourceKind, Section, Slide, SlideKind, Track};
pub use validate::ValidationIssue;
