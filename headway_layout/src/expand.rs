// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion of a single stop into a fan of content subnodes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use headway_content::Deck;
use kurbo::Point;

use crate::edge::{EdgeKind, EdgeStyle, Handle, VisualEdge};
use crate::geometry;
use crate::metro::stop_node_id;
use crate::node::{NodeData, NodeFlags, SubnodeContent, SubnodeData, VisualNode};

/// Horizontal spacing between neighboring subnodes of a fan.
const SUBNODE_SPACING: f64 = 150.0;

/// How far the fan rises above its stop.
const SUBNODE_RISE: f64 = 160.0;

/// Control point placement of a bullet arc, as a fraction of its span.
const ARC_PULL: f64 = 0.3;

const ARC_WIDTH: f64 = 2.0;
const BRANCH_RADIUS: f64 = 8.0;
const BRANCH_WIDTH: f64 = 4.0;
const BRANCH_DASH: [f64; 2] = [8.0, 4.0];

/// Paint order of subnodes, above every stop.
const SUBNODE_Z: i32 = 10;

/// Overlay nodes and edges of one expanded stop.
///
/// The overlay is positioned relative to the stop's current position, so
/// it follows dragged stops. Dropping it collapses the stop again.
#[derive(Clone, Debug, PartialEq)]
pub struct StopExpansion {
    /// The fan's subnodes, leftmost first.
    pub nodes: Vec<VisualNode>,
    /// One link per subnode, connecting it to its stop.
    pub edges: Vec<VisualEdge>,
}

/// Expands a stop into a fan of subnodes above it.
///
/// The fan lists the slide's bullets first, then every attached
/// resource, centered over `origin` (the stop's position). Bullets hang
/// from curved arcs, resources from dashed branch stubs. Returns `None`
/// when the slide is unknown or has nothing to show.
pub fn expand_stop(deck: &Deck, slide_id: &str, origin: Point) -> Option<StopExpansion> {
    let slide = deck.slide(slide_id)?;
    let color = geometry::line_color(&slide.section_id);
    let stop_id = stop_node_id(slide_id);

    let mut contents = slide
        .bullets
        .iter()
        .cloned()
        .map(SubnodeContent::Bullet)
        .collect::<Vec<_>>();
    contents.extend(
        deck.resources_for(slide_id)
            .cloned()
            .map(SubnodeContent::Resource),
    );
    if contents.is_empty() {
        return None;
    }

    let count = contents.len();
    let mut nodes = Vec::with_capacity(count);
    let mut edges = Vec::with_capacity(count);
    for (index, content) in contents.into_iter().enumerate() {
        let subnode_id = format!("subnode-{slide_id}-{index}");
        let spread = index as f64 - (count as f64 - 1.0) / 2.0;
        let is_resource = matches!(content, SubnodeContent::Resource(_));

        nodes.push(VisualNode {
            id: subnode_id.clone(),
            position: Point::new(origin.x + spread * SUBNODE_SPACING, origin.y - SUBNODE_RISE),
            z_index: SUBNODE_Z,
            flags: NodeFlags::SELECTABLE,
            data: NodeData::Subnode(SubnodeData {
                owner: String::from(slide_id),
                content,
                index,
                count,
                color,
            }),
        });
        edges.push(if is_resource {
            VisualEdge {
                id: format!("edge-{stop_id}-{subnode_id}"),
                source: stop_id.clone(),
                target: subnode_id,
                source_handle: Some(Handle::Top),
                target_handle: Some(Handle::Bottom),
                kind: EdgeKind::SubnodeBranch {
                    radius: BRANCH_RADIUS,
                },
                style: EdgeStyle {
                    color,
                    width: BRANCH_WIDTH,
                    dash: Some(BRANCH_DASH),
                },
            }
        } else {
            VisualEdge {
                id: format!("edge-{subnode_id}-{stop_id}"),
                source: subnode_id,
                target: stop_id.clone(),
                source_handle: Some(Handle::Bottom),
                target_handle: Some(Handle::Top),
                kind: EdgeKind::Arc { pull: ARC_PULL },
                style: EdgeStyle {
                    color,
                    width: ARC_WIDTH,
                    dash: None,
                },
            }
        });
    }
    Some(StopExpansion { nodes, edges })
}
