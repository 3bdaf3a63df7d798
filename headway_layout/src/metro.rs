// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic generation of the full metro map from a deck and its
//! topology.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use headway_content::{Anchor, Deck, Orientation, Slide, Topology};
use kurbo::{Point, Size};
use peniko::Color;
use smallvec::SmallVec;

use crate::edge::{EdgeKind, EdgeStyle, Handle, VisualEdge};
use crate::geometry;
use crate::node::{NodeData, NodeFlags, StopData, VisualNode};

/// Node id of the parchment backdrop.
pub const BACKGROUND_NODE_ID: &str = "metro-background";

/// Node id of the stop presenting `slide_id`.
pub fn stop_node_id(slide_id: &str) -> String {
    format!("metro-{slide_id}")
}

/// A complete generated map.
///
/// Both lists are in paint order, lowest first: the backdrop is always
/// the first node, and the river spans precede every line in the edge
/// list. Generation is a pure function of the deck and topology, so the
/// same inputs always produce an identical layout.
#[derive(Clone, Debug, PartialEq)]
pub struct MetroLayout {
    /// Every positioned element of the map.
    pub nodes: Vec<VisualNode>,
    /// Every connection of the map.
    pub edges: Vec<VisualEdge>,
}

impl MetroLayout {
    /// The node with the given id, if present.
    pub fn node(&self, id: &str) -> Option<&VisualNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Mutable access to the node with the given id, if present.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut VisualNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// The edge with the given id, if present.
    pub fn edge(&self, id: &str) -> Option<&VisualEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// All stop nodes, in line order.
    pub fn stops(&self) -> impl Iterator<Item = &VisualNode> {
        self.nodes.iter().filter(|node| node.as_stop().is_some())
    }

    /// The stop presenting the given slide, if present.
    pub fn stop_for_slide(&self, slide_id: &str) -> Option<&VisualNode> {
        self.node(&stop_node_id(slide_id))
    }
}

/// Where each section's stops begin and end.
struct StopIndex {
    /// Section id to the node id of its first stop.
    first: HashMap<String, String>,
    /// Section id to the node id of its last stop.
    last: HashMap<String, String>,
    /// Stop node id to its section id.
    section_of: HashMap<String, String>,
}

/// Generates the metro map for a deck.
///
/// Every section lays its slides out as evenly spaced stops marching
/// right from the section's anchor, joined by thick line segments in the
/// section's color. Featured resources hang under their stops as icons,
/// the topology's links become inter-section connectors, and stops where
/// three or more line segments meet are marked as junctions. Decorative
/// elements (line labels, landmarks, the river) round out the map, and a
/// backdrop sized to cover everything is prepended.
pub fn generate_metro_layout(deck: &Deck, topology: &Topology) -> MetroLayout {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let index = place_sections(deck, &mut nodes, &mut edges);
    push_connectors(topology, &index, &mut edges);
    mark_junctions(&mut nodes, &edges, &index);
    push_line_labels(deck, &index, &mut nodes);
    push_landmarks(deck, &mut nodes);

    let mut all_edges = push_river(&mut nodes);
    all_edges.append(&mut edges);

    nodes.insert(0, background_for(&nodes));
    MetroLayout {
        nodes,
        edges: all_edges,
    }
}

/// Lays out every section's stops, icons, and in-section segments.
fn place_sections(
    deck: &Deck,
    nodes: &mut Vec<VisualNode>,
    edges: &mut Vec<VisualEdge>,
) -> StopIndex {
    let mut index = StopIndex {
        first: HashMap::new(),
        last: HashMap::new(),
        section_of: HashMap::new(),
    };

    for section in deck.sections() {
        let color = geometry::line_color(&section.id);
        let mut position = geometry::section_anchor(&section.id);
        let mut previous: Option<String> = None;

        let slides = deck.slides_in(&section.id).collect::<Vec<_>>();
        for (slide_index, slide) in slides.iter().enumerate() {
            let node_id = stop_node_id(&slide.id);
            if slide_index == 0 {
                index.first.insert(section.id.clone(), node_id.clone());
            }
            if slide_index + 1 == slides.len() {
                index.last.insert(section.id.clone(), node_id.clone());
            }
            index.section_of.insert(node_id.clone(), section.id.clone());

            nodes.push(VisualNode {
                id: node_id.clone(),
                position,
                z_index: 0,
                flags: NodeFlags::DRAGGABLE | NodeFlags::SELECTABLE,
                data: NodeData::Stop(StopData {
                    slide: (*slide).clone(),
                    color,
                    junction_colors: SmallVec::new(),
                }),
            });
            push_resource_icons(deck, slide, &node_id, position, nodes, edges);

            if let Some(previous) = previous {
                edges.push(VisualEdge {
                    id: format!("edge-{previous}-{node_id}"),
                    source: previous,
                    target: node_id.clone(),
                    source_handle: Some(Handle::Right),
                    target_handle: Some(Handle::Left),
                    kind: EdgeKind::MetroLine {
                        radius: geometry::EDGE_BORDER_RADIUS,
                    },
                    style: line_style(color),
                });
            }
            previous = Some(node_id);
            position.x += geometry::STOP_SPACING;
        }
    }
    index
}

/// Hangs a slide's featured resources under its stop, centered on it.
fn push_resource_icons(
    deck: &Deck,
    slide: &Slide,
    stop_id: &str,
    stop: Point,
    nodes: &mut Vec<VisualNode>,
    edges: &mut Vec<VisualEdge>,
) {
    let featured = deck.featured_resources_for(&slide.id).collect::<Vec<_>>();
    let count = featured.len() as f64;
    for (icon_index, resource) in featured.into_iter().enumerate() {
        let icon_id = format!("resource-icon-{}", resource.id);
        edges.push(VisualEdge {
            id: format!("edge-{stop_id}-{icon_id}"),
            source: String::from(stop_id),
            target: icon_id.clone(),
            source_handle: Some(Handle::Bottom),
            target_handle: None,
            kind: EdgeKind::ResourceLink,
            style: EdgeStyle {
                color: geometry::RESOURCE_LINK_COLOR,
                width: geometry::RESOURCE_LINK_WIDTH,
                dash: None,
            },
        });
        nodes.push(VisualNode {
            id: icon_id,
            position: Point::new(
                stop.x + (icon_index as f64 - count / 2.0) * 30.0,
                stop.y + 50.0,
            ),
            z_index: 0,
            flags: NodeFlags::SELECTABLE,
            data: NodeData::ResourceIcon {
                resource: resource.clone(),
            },
        });
    }
}

/// Turns every topology link into an inter-section connector edge.
///
/// Connectors take the destination section's color, so a line visually
/// begins at the stop it branches from. Links into or out of a section
/// with no stops are skipped.
fn push_connectors(topology: &Topology, index: &StopIndex, edges: &mut Vec<VisualEdge>) {
    for link in topology.links() {
        let source = match link.source_anchor {
            Anchor::First => index.first.get(&link.source),
            Anchor::Last => index.last.get(&link.source),
        };
        let (Some(source), Some(target)) = (source, index.first.get(&link.target)) else {
            continue;
        };
        let (source_handle, target_handle, offset) = match link.orientation {
            Orientation::Level => (Handle::Right, Handle::Left, geometry::CONNECTOR_OFFSET),
            Orientation::Drop => (Handle::Bottom, Handle::Top, geometry::DROP_OFFSET),
        };
        edges.push(VisualEdge {
            id: format!("edge-{}-to-{}", link.source, link.target),
            source: source.clone(),
            target: target.clone(),
            source_handle: Some(source_handle),
            target_handle: Some(target_handle),
            kind: EdgeKind::Connector {
                radius: geometry::EDGE_BORDER_RADIUS,
                offset,
            },
            style: line_style(geometry::line_color(&link.target)),
        });
    }
}

/// Marks stops where three or more line segments meet as junctions.
///
/// A junction's ring collects the line colors of both endpoints of each
/// incident segment, in edge list order, deduplicated. Decoration edges
/// never count toward incidence.
fn mark_junctions(nodes: &mut [VisualNode], edges: &[VisualEdge], index: &StopIndex) {
    let mut incidence: HashMap<&str, usize> = HashMap::new();
    for edge in edges {
        if !edge.kind.is_line() {
            continue;
        }
        for endpoint in [edge.source.as_str(), edge.target.as_str()] {
            if index.section_of.contains_key(endpoint) {
                *incidence.entry(endpoint).or_insert(0) += 1;
            }
        }
    }

    let mut rings: HashMap<&str, SmallVec<[Color; 4]>> = HashMap::new();
    for edge in edges {
        if !edge.kind.is_line() {
            continue;
        }
        for stop in [edge.source.as_str(), edge.target.as_str()] {
            if incidence.get(stop).copied().unwrap_or(0) < 3 {
                continue;
            }
            for endpoint in [edge.source.as_str(), edge.target.as_str()] {
                let Some(section) = index.section_of.get(endpoint) else {
                    continue;
                };
                let color = geometry::line_color(section);
                let ring = rings.entry(stop).or_default();
                if !ring.contains(&color) {
                    ring.push(color);
                }
            }
        }
    }

    for node in nodes {
        let Some(ring) = rings.remove(node.id.as_str()) else {
            continue;
        };
        if let NodeData::Stop(stop) = &mut node.data {
            stop.junction_colors = ring;
        }
    }
}

/// Places a line name plate near the first stop of each labeled section.
fn push_line_labels(deck: &Deck, index: &StopIndex, nodes: &mut Vec<VisualNode>) {
    for section in deck.sections() {
        let Some(spec) = geometry::line_label(&section.id) else {
            continue;
        };
        if !index.first.contains_key(&section.id) {
            continue;
        }
        let anchor = geometry::section_anchor(&section.id);
        nodes.push(VisualNode {
            id: format!("metro-label-{}", section.id),
            position: Point::new(anchor.x + spec.offset.0, anchor.y + spec.offset.1),
            z_index: 0,
            flags: NodeFlags::DRAGGABLE | NodeFlags::SELECTABLE,
            data: NodeData::LineLabel {
                line_name: String::from(spec.line_name),
                subtitle: String::from(spec.subtitle),
                color: geometry::line_color(&section.id),
            },
        });
    }
}

/// Places the deck's landmarks. Landmarks the map has no position for
/// are left off rather than piled at the origin.
fn push_landmarks(deck: &Deck, nodes: &mut Vec<VisualNode>) {
    for landmark in deck.landmarks() {
        let Some(anchor) = geometry::landmark_anchor(&landmark.id) else {
            continue;
        };
        nodes.push(VisualNode {
            id: landmark.id.clone(),
            position: anchor,
            z_index: -50,
            flags: NodeFlags::DRAGGABLE,
            data: NodeData::Landmark {
                label: landmark.label.clone(),
                image: landmark.image.clone(),
                scale: landmark.default_scale.unwrap_or(1.0),
            },
        });
    }
}

/// Threads the river through its waypoints and returns its spans.
///
/// The spans carry the river label on the middle one and must lead the
/// edge list so every line paints over them.
fn push_river(nodes: &mut Vec<VisualNode>) -> Vec<VisualEdge> {
    let mut spans = Vec::new();
    let middle = (geometry::RIVER_COURSE.len() - 2) / 2;
    let mut previous: Option<String> = None;

    for (waypoint_index, point) in geometry::RIVER_COURSE.iter().enumerate() {
        let id = format!("river-waypoint-{waypoint_index}");
        nodes.push(VisualNode {
            id: id.clone(),
            position: *point,
            z_index: -60,
            flags: NodeFlags::DRAGGABLE,
            data: NodeData::RiverWaypoint {
                index: waypoint_index,
            },
        });
        if let Some(previous) = previous {
            let label = (spans.len() == middle).then(|| String::from(geometry::RIVER_LABEL));
            spans.push(VisualEdge {
                id: format!("river-{}-{waypoint_index}", waypoint_index - 1),
                source: previous,
                target: id.clone(),
                source_handle: Some(Handle::Right),
                target_handle: Some(Handle::Left),
                kind: EdgeKind::River { label },
                style: EdgeStyle {
                    color: geometry::RIVER_COLOR,
                    width: geometry::RIVER_WIDTH,
                    dash: None,
                },
            });
        }
        previous = Some(id);
    }
    spans
}

/// Builds the backdrop node, padded past the farthest node.
fn background_for(nodes: &[VisualNode]) -> VisualNode {
    let mut max = Point::ZERO;
    for node in nodes {
        max.x = max.x.max(node.position.x + 200.0);
        max.y = max.y.max(node.position.y + 200.0);
    }
    VisualNode {
        id: String::from(BACKGROUND_NODE_ID),
        position: Point::new(-100.0, -100.0),
        z_index: -100,
        flags: NodeFlags::empty(),
        data: NodeData::Background {
            size: Size::new(max.x + 200.0, max.y + 200.0),
        },
    }
}

fn line_style(color: Color) -> EdgeStyle {
    EdgeStyle {
        color,
        width: geometry::LINE_THICKNESS,
        dash: None,
    }
}
