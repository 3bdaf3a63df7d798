// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual node types emitted by the layout generator.

use alloc::string::String;

use kurbo::{Point, Size};
use peniko::Color;
use smallvec::SmallVec;

use headway_content::{Resource, Slide};

bitflags::bitflags! {
    /// Node flags controlling interaction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node can be repositioned by dragging (honored only in edit mode).
        const DRAGGABLE  = 0b0000_0001;
        /// Node participates in hit testing and click handling.
        const SELECTABLE = 0b0000_0010;
    }
}

/// Payload of a metro stop node.
#[derive(Clone, Debug, PartialEq)]
pub struct StopData {
    /// The slide this stop presents.
    pub slide: Slide,
    /// Color of the line the stop sits on.
    pub color: Color,
    /// Colors of the lines meeting here, in discovery order.
    ///
    /// Empty for ordinary stops. Junctions (three or more line segments
    /// incident) carry one entry per distinct line for ring rendering.
    pub junction_colors: SmallVec<[Color; 4]>,
}

impl StopData {
    /// Whether this stop is a junction between lines.
    pub fn is_junction(&self) -> bool {
        !self.junction_colors.is_empty()
    }
}

/// What an expansion subnode displays.
#[derive(Clone, Debug, PartialEq)]
pub enum SubnodeContent {
    /// One bullet of the owning slide.
    Bullet(String),
    /// A resource attached to the owning slide.
    Resource(Resource),
}

/// Payload of an expansion subnode.
#[derive(Clone, Debug, PartialEq)]
pub struct SubnodeData {
    /// Slide id of the expanded stop this subnode belongs to.
    pub owner: String,
    /// Displayed content.
    pub content: SubnodeContent,
    /// Position of this subnode in the fan, left to right.
    pub index: usize,
    /// Total subnodes in the fan.
    pub count: usize,
    /// Line color of the owning stop, used for accents.
    pub color: Color,
}

/// Kind-specific payload of a [`VisualNode`].
#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    /// A slide rendered as a stop on its line.
    Stop(StopData),
    /// Small icon for a featured resource, hanging under its stop.
    ResourceIcon {
        /// The featured resource.
        resource: Resource,
    },
    /// A draggable line name plate near a section's first stop.
    LineLabel {
        /// The big line name, e.g. "RED LINE".
        line_name: String,
        /// The descriptive subtitle under the name.
        subtitle: String,
        /// The line's color.
        color: Color,
    },
    /// A large decorative destination image.
    Landmark {
        /// Display label, shown while positioning in edit mode.
        label: String,
        /// Image asset path, if the landmark has one.
        image: Option<String>,
        /// Uniform display scale.
        scale: f64,
    },
    /// One element of an expanded stop's fan.
    Subnode(SubnodeData),
    /// Invisible control point shaping the river course.
    RiverWaypoint {
        /// Position along the course, upstream to downstream.
        index: usize,
    },
    /// The parchment backdrop sized to cover the whole map.
    Background {
        /// Backdrop extent.
        size: Size,
    },
}

/// One positioned element of the map.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
    /// Stable node id; persisted positions and edges key on it.
    pub id: String,
    /// Top-left position in map coordinates.
    pub position: Point,
    /// Paint order; higher draws above.
    pub z_index: i32,
    /// Interaction flags.
    pub flags: NodeFlags,
    /// Kind-specific payload.
    pub data: NodeData,
}

impl VisualNode {
    /// The stop payload, when this node is a stop.
    pub fn as_stop(&self) -> Option<&StopData> {
        match &self.data {
            NodeData::Stop(stop) => Some(stop),
            _ => None,
        }
    }

    /// Id of the slide this node presents, when it is a stop.
    pub fn slide_id(&self) -> Option<&str> {
        self.as_stop().map(|stop| stop.slide.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_inert() {
        let flags = NodeFlags::default();
        assert!(!flags.contains(NodeFlags::DRAGGABLE));
        assert!(!flags.contains(NodeFlags::SELECTABLE));
    }

    #[test]
    fn junction_is_derived_from_ring_colors() {
        let slide = Slide::new("s", "sec", headway_content::SlideKind::Content, "S");
        let mut stop = StopData {
            slide,
            color: Color::from_rgb8(1, 2, 3),
            junction_colors: SmallVec::new(),
        };
        assert!(!stop.is_junction());
        stop.junction_colors.push(Color::from_rgb8(4, 5, 6));
        assert!(stop.is_junction());
    }
}
