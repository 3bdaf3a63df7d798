// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative section topology.
//!
//! A [`Topology`] is an ordered list of [`SectionLink`]s describing how
//! sections feed into one another. The same value drives two consumers:
//! `headway_layout` turns every link into a connector edge, and
//! `headway_nav` reads the link roles to wire up previous/next traversal.
//! Keeping one table for both removes the drift that creeps in when layout
//! and navigation each keep their own copy of the map's shape.

use alloc::string::String;
use alloc::vec::Vec;

/// Which slide of a section a link attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// The section's first slide.
    First,
    /// The section's last slide.
    Last,
}

/// Traversal policy carried by a link.
///
/// Roles answer two independent questions: does stepping "next" off the end
/// of the source section follow this link, and does the target section's
/// first slide point back along it for "previous"?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRole {
    /// The trunk path: advances `next` and supplies `previous`.
    Main,
    /// A fork to an alternate line: supplies `previous` into the target, but
    /// `next` never follows it. The forked line is reached by direct
    /// selection.
    Branch,
    /// A convergence into a shared section: advances `next`. Only the link
    /// flagged `primary` also supplies the shared section's `previous`.
    Merge {
        /// Whether this is the distinguished path back out of the merge.
        primary: bool,
    },
    /// Purely visual. Contributes a connector to layout and nothing to
    /// navigation.
    Scenic,
}

/// How layout routes the connector for a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// A run between lines at comparable heights: leaves the source stop's
    /// right side and enters the target stop's left side.
    Level,
    /// A drop to a parallel line below: leaves the source stop's bottom and
    /// enters the target stop's top.
    Drop,
}

/// One inter-section link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLink {
    /// Source section id.
    pub source: String,
    /// Which slide of the source section the link leaves from.
    pub source_anchor: Anchor,
    /// Target section id. Links always enter at the target's first slide.
    pub target: String,
    /// Traversal policy.
    pub role: LinkRole,
    /// Connector routing hint for layout.
    pub orientation: Orientation,
}

impl SectionLink {
    /// Creates a link with every field explicit.
    pub fn new(
        source: impl Into<String>,
        source_anchor: Anchor,
        target: impl Into<String>,
        role: LinkRole,
        orientation: Orientation,
    ) -> Self {
        Self {
            source: source.into(),
            source_anchor,
            target: target.into(),
            role,
            orientation,
        }
    }

    /// A trunk link: last slide of `source`, level routing.
    pub fn main(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            source,
            Anchor::Last,
            target,
            LinkRole::Main,
            Orientation::Level,
        )
    }

    /// A fork link: last slide of `source`, level routing.
    pub fn branch(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            source,
            Anchor::Last,
            target,
            LinkRole::Branch,
            Orientation::Level,
        )
    }

    /// A convergence link: last slide of `source`, level routing.
    pub fn merge(source: impl Into<String>, target: impl Into<String>, primary: bool) -> Self {
        Self::new(
            source,
            Anchor::Last,
            target,
            LinkRole::Merge { primary },
            Orientation::Level,
        )
    }

    /// A visual-only link: last slide of `source`, level routing.
    pub fn scenic(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            source,
            Anchor::Last,
            target,
            LinkRole::Scenic,
            Orientation::Level,
        )
    }

    /// Moves the source anchor to the section's first slide.
    pub fn from_first(mut self) -> Self {
        self.source_anchor = Anchor::First;
        self
    }

    /// Routes the connector as a drop to a parallel line below.
    pub fn dropping(mut self) -> Self {
        self.orientation = Orientation::Drop;
        self
    }

    /// Whether stepping `next` off the source section follows this link.
    pub fn advances(&self) -> bool {
        matches!(self.role, LinkRole::Main | LinkRole::Merge { .. })
    }

    /// Whether the target section's first slide points back along this link.
    pub fn supplies_previous(&self) -> bool {
        match self.role {
            LinkRole::Main | LinkRole::Branch => true,
            LinkRole::Merge { primary } => primary,
            LinkRole::Scenic => false,
        }
    }
}

/// An ordered list of [`SectionLink`]s.
///
/// Order matters: when several links could supply the same navigation
/// endpoint, the first one in declaration order wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topology {
    links: Vec<SectionLink>,
}

impl Topology {
    /// Creates a topology from an ordered link list.
    pub fn new(links: Vec<SectionLink>) -> Self {
        Self { links }
    }

    /// All links, in declaration order.
    pub fn links(&self) -> &[SectionLink] {
        &self.links
    }

    /// Links leaving `section`, in declaration order.
    pub fn links_from(&self, section: &str) -> impl Iterator<Item = &SectionLink> {
        self.links.iter().filter(move |link| link.source == section)
    }

    /// Links entering `section`, in declaration order.
    pub fn links_into(&self, section: &str) -> impl Iterator<Item = &SectionLink> {
        self.links.iter().filter(move |link| link.target == section)
    }
}
