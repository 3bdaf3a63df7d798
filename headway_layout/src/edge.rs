// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual edge types emitted by the layout generator.

use alloc::string::String;

use peniko::Color;

/// A node-side attachment point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// Left edge midpoint.
    Left,
    /// Right edge midpoint.
    Right,
    /// Top edge midpoint.
    Top,
    /// Bottom edge midpoint.
    Bottom,
}

impl Handle {
    /// Stable wire name of the handle.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Parses a wire name back into a handle.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Routing kind of a [`VisualEdge`], with kind-specific parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeKind {
    /// A line segment between consecutive stops of one section. Stepped
    /// routing with rounded corners.
    MetroLine {
        /// Corner radius of the stepped bends.
        radius: f64,
    },
    /// An inter-section connector. Stepped routing that steps out by
    /// `offset` before turning, clearing the line labels.
    Connector {
        /// Corner radius of the stepped bends.
        radius: f64,
        /// Step-out distance before the first bend.
        offset: f64,
    },
    /// Thin straight link from a stop to a featured resource icon.
    ResourceLink,
    /// Curved link from an expansion subnode down to its stop. A cubic
    /// bezier whose control points sit `pull` of the vertical span from
    /// either end.
    Arc {
        /// Control point placement as a fraction of the vertical span.
        pull: f64,
    },
    /// Dashed stepped link from a stop to a resource subnode.
    SubnodeBranch {
        /// Corner radius of the stepped bends.
        radius: f64,
    },
    /// A wide translucent river span. Renders below every line.
    River {
        /// Text drawn along this span, if any.
        label: Option<String>,
    },
}

impl EdgeKind {
    /// Whether this kind draws a metro line segment (in-section or
    /// connector), as opposed to decoration.
    pub fn is_line(&self) -> bool {
        matches!(self, Self::MetroLine { .. } | Self::Connector { .. })
    }
}

/// Stroke styling of an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
    /// Dash pattern `[on, off]`, or `None` for a solid stroke.
    pub dash: Option<[f64; 2]>,
}

/// One connection of the map.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualEdge {
    /// Stable edge id; edge edits key on it.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Attachment point on the source node, if pinned.
    pub source_handle: Option<Handle>,
    /// Attachment point on the target node, if pinned.
    pub target_handle: Option<Handle>,
    /// Routing kind and parameters.
    pub kind: EdgeKind,
    /// Stroke styling.
    pub style: EdgeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_wire_names() {
        for handle in [Handle::Left, Handle::Right, Handle::Top, Handle::Bottom] {
            assert_eq!(Handle::parse(handle.as_str()), Some(handle));
        }
        assert_eq!(Handle::parse("middle"), None);
    }

    #[test]
    fn line_kinds() {
        assert!(EdgeKind::MetroLine { radius: 20.0 }.is_line());
        let connector = EdgeKind::Connector {
            radius: 20.0,
            offset: 80.0,
        };
        assert!(connector.is_line());
        assert!(!EdgeKind::ResourceLink.is_line());
        assert!(!EdgeKind::River { label: None }.is_line());
    }
}
