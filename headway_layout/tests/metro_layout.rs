// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-map generation over the bundled deck.

use headway_content::{Deck, Resource, ResourceKind, Section, Slide, SlideKind, Topology, Track};
use headway_content::{bundled_deck, bundled_topology};
use headway_layout::{
    BACKGROUND_NODE_ID, EdgeKind, Handle, MetroLayout, NodeData, NodeFlags, generate_metro_layout,
    geometry, stop_node_id,
};
use kurbo::{Point, Size};
use peniko::Color;

fn bundled_layout() -> MetroLayout {
    generate_metro_layout(&bundled_deck(), &bundled_topology())
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(bundled_layout(), bundled_layout());
}

#[test]
fn bundled_map_census() {
    let layout = bundled_layout();
    // 1 backdrop, 30 stops, 7 resource icons, 7 line labels, 6 landmarks,
    // 4 river waypoints.
    assert_eq!(layout.nodes.len(), 55);
    // 3 river spans, 23 in-section segments, 7 resource links,
    // 9 connectors.
    assert_eq!(layout.edges.len(), 42);
}

#[test]
fn consecutive_slides_share_one_segment() {
    let deck = bundled_deck();
    let layout = bundled_layout();
    for section in deck.sections() {
        let slides: Vec<_> = deck.slides_in(&section.id).collect();
        for pair in slides.windows(2) {
            let source = stop_node_id(&pair[0].id);
            let target = stop_node_id(&pair[1].id);
            let segments = layout
                .edges
                .iter()
                .filter(|edge| {
                    matches!(edge.kind, EdgeKind::MetroLine { .. })
                        && edge.source == source
                        && edge.target == target
                })
                .count();
            assert_eq!(segments, 1, "{source} -> {target}");
        }
    }
}

#[test]
fn junctions_ring_the_meeting_lines() {
    let layout = bundled_layout();
    let junctions: Vec<(&str, &[Color])> = layout
        .stops()
        .filter_map(|node| {
            let stop = node.as_stop()?;
            stop.is_junction()
                .then(|| (stop.slide.id.as_str(), stop.junction_colors.as_slice()))
        })
        .collect();

    let green = geometry::line_color("mapping");
    let blue = geometry::line_color("levels-nontech");
    let orange = geometry::line_color("levels-tech");
    let magenta = geometry::line_color("projects");
    let purple = geometry::line_color("closing");
    assert_eq!(
        junctions,
        vec![
            ("slide-06", &[green, blue, orange][..]),
            ("slide-15", &[blue, purple, orange][..]),
            ("slide-16", &[orange, green, magenta, blue][..]),
            ("slide-29", &[purple, blue, orange, magenta][..]),
        ]
    );
}

#[test]
fn connectors_follow_the_topology() {
    let layout = bundled_layout();

    // The fork out of the trunk runs level into the technical track.
    let fork = layout.edge("edge-mapping-to-levels-tech").unwrap();
    assert_eq!(fork.source, "metro-slide-06");
    assert_eq!(fork.target, "metro-slide-16");
    assert_eq!(fork.source_handle, Some(Handle::Right));
    assert_eq!(fork.target_handle, Some(Handle::Left));
    assert_eq!(fork.style.color, geometry::line_color("levels-tech"));

    // The projects spur leaves the technical track's first stop downward.
    let spur = layout.edge("edge-levels-tech-to-projects").unwrap();
    assert_eq!(spur.source, "metro-slide-16");
    assert_eq!(spur.target, "metro-slide-26");
    assert_eq!(spur.source_handle, Some(Handle::Bottom));
    assert_eq!(spur.target_handle, Some(Handle::Top));

    // Every connector wears its destination's color.
    for edge in &layout.edges {
        if !matches!(edge.kind, EdgeKind::Connector { .. }) {
            continue;
        }
        let destination = layout
            .node(&edge.target)
            .and_then(|node| node.as_stop())
            .map(|stop| &stop.slide.section_id)
            .unwrap();
        assert_eq!(edge.style.color, geometry::line_color(destination));
    }
}

#[test]
fn backdrop_spans_the_whole_map() {
    let layout = bundled_layout();
    let backdrop = layout.node(BACKGROUND_NODE_ID).unwrap();
    assert!(core::ptr::eq(backdrop, &layout.nodes[0]));
    assert_eq!(
        backdrop.data,
        NodeData::Background {
            size: Size::new(3900.0, 1550.0),
        }
    );
}

#[test]
fn decorations_take_their_places() {
    let deck = bundled_deck();
    let layout = bundled_layout();

    let label = layout.node("metro-label-intro").unwrap();
    assert_eq!(label.position, Point::new(50.0, 70.0));
    assert_eq!(label.flags, NodeFlags::DRAGGABLE | NodeFlags::SELECTABLE);
    let NodeData::LineLabel { line_name, .. } = &label.data else {
        panic!("metro-label-intro is not a line label");
    };
    assert_eq!(line_name, "RED LINE");

    for landmark in deck.landmarks() {
        let node = layout.node(&landmark.id).unwrap();
        assert_eq!(node.z_index, -50);
        assert!(node.flags.contains(NodeFlags::DRAGGABLE));
        assert!(!node.flags.contains(NodeFlags::SELECTABLE));
    }

    for index in 0..geometry::RIVER_COURSE.len() {
        let id = format!("river-waypoint-{index}");
        let node = layout.node(&id).unwrap();
        assert_eq!(node.position, geometry::RIVER_COURSE[index]);
        assert_eq!(node.data, NodeData::RiverWaypoint { index });
    }
}

#[test]
fn featured_icons_hang_under_their_stops() {
    let layout = bundled_layout();
    let stop = layout.stop_for_slide("slide-11").unwrap();

    // Three featured tools, centered on the stop, a row below it.
    let icons = ["res-wispr", "res-granola", "res-obsidian"];
    for (offset, id) in [-45.0, -15.0, 15.0].iter().zip(icons) {
        let icon = layout.node(&format!("resource-icon-{id}")).unwrap();
        assert_eq!(
            icon.position,
            Point::new(stop.position.x + offset, stop.position.y + 50.0)
        );
        assert_eq!(icon.flags, NodeFlags::SELECTABLE);
        let link = layout
            .edge(&format!("edge-{}-resource-icon-{id}", stop.id))
            .unwrap();
        assert_eq!(link.kind, EdgeKind::ResourceLink);
        assert_eq!(link.source_handle, Some(Handle::Bottom));
    }

    // Non-featured resources stay off the map.
    assert!(layout.node("resource-icon-res-context-reset").is_none());
}

#[test]
fn dangling_resources_are_left_off() {
    let deck = Deck::new(
        vec![Section::new("a", "A", Track::General)],
        vec![Slide::new("a1", "a", SlideKind::Content, "A1")],
        vec![
            Resource::new(
                "res-ghost",
                "gone",
                ResourceKind::Tool,
                "Ghost",
                "https://g.example",
            )
            .featured(),
        ],
        vec![],
    );
    let layout = generate_metro_layout(&deck, &Topology::new(vec![]));
    assert!(layout.node("resource-icon-res-ghost").is_none());
    // Backdrop, the lone stop, and the river waypoints.
    assert_eq!(layout.nodes.len(), 2 + geometry::RIVER_COURSE.len());
}
