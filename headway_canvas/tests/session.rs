// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole sessions driven the way a host would drive them.

use std::fs;

use kurbo::Point;

use headway_canvas::{CanvasConfig, MetroCanvas};
use headway_content::{Anchor, LinkRole, bundled_deck, bundled_topology};
use headway_nav::{FitOptions, NavKey, ViewportTarget};
use headway_store::{DirStorage, MemoryStorage, parse_committed};

fn edit_session() -> MetroCanvas<MemoryStorage> {
    MetroCanvas::new(
        bundled_deck(),
        bundled_topology(),
        MemoryStorage::new(),
        CanvasConfig::default(),
    )
    .unwrap()
}

#[test]
fn a_click_then_a_keyboard_walk() {
    let mut canvas = edit_session();

    assert!(canvas.on_stop_clicked("metro-slide-01"));
    let requests = canvas.take_viewport_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, ViewportTarget::Slide("slide-01".into()));
    assert_eq!(requests[0].options, FitOptions::CLOSE_UP);

    // The host animates to the stop and reports the settle; that settle
    // belongs to the click and must not re-enter navigation.
    canvas.on_viewport_settled("slide-01");
    assert_eq!(canvas.nav().current_slide(), Some("slide-01"));

    assert!(canvas.on_key(NavKey::ArrowRight));
    assert_eq!(canvas.nav().current_slide(), Some("slide-02"));
    let requests = canvas.take_viewport_requests();
    assert_eq!(requests[0].target, ViewportTarget::Slide("slide-02".into()));
    assert_eq!(requests[0].options, FitOptions::FOCUS);
    canvas.on_viewport_settled("slide-02");

    // Free-form panning afterwards does move the current slide.
    canvas.on_viewport_settled("slide-09");
    assert_eq!(canvas.nav().current_slide(), Some("slide-09"));
}

#[test]
fn edits_survive_a_restart() {
    let root = std::env::temp_dir().join(format!("headway-canvas-test-{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);

    let deck = bundled_deck();
    let topology = bundled_topology();

    let mut canvas = MetroCanvas::new(
        deck.clone(),
        topology.clone(),
        DirStorage::new(&root),
        CanvasConfig::default(),
    )
    .unwrap();
    assert!(canvas.begin_drag("metro-slide-01", Point::ZERO));
    canvas.drag_to(Point::new(40.0, 30.0), 100);
    canvas.end_drag(150);
    assert!(canvas.tick(650).unwrap());
    let removed = canvas.delete_edge("edge-intro-to-understanding", 700);
    assert!(removed.unwrap());
    drop(canvas);

    let reopened = MetroCanvas::new(
        deck,
        topology,
        DirStorage::new(&root),
        CanvasConfig::default(),
    )
    .unwrap();
    let stop = reopened.layout().stop_for_slide("slide-01").unwrap();
    assert_eq!(stop.position, Point::new(140.0, 180.0));
    assert!(
        reopened
            .edges()
            .iter()
            .all(|edge| edge.id != "edge-intro-to-understanding")
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn one_topology_drives_both_map_and_navigation() {
    let canvas = edit_session();
    let topology = bundled_topology();
    let graph = canvas.nav().graph();

    for link in topology.links() {
        // Every link draws exactly one connector on the map, between
        // nodes that exist.
        let id = format!("edge-{}-to-{}", link.source, link.target);
        let connector = canvas.layout().edge(&id).unwrap();
        assert!(canvas.layout().node(&connector.source).is_some(), "{id}");
        assert!(canvas.layout().node(&connector.target).is_some(), "{id}");

        // And, scenic bridges aside, the same boundary is walkable.
        if link.role == LinkRole::Scenic {
            continue;
        }
        let deck = canvas.deck();
        let exit = match link.source_anchor {
            Anchor::First => deck.first_slide_in(&link.source),
            Anchor::Last => deck.last_slide_in(&link.source),
        }
        .unwrap();
        let entry = deck.first_slide_in(&link.target).unwrap();
        let forwards = graph.next_of(&exit.id) == Some(entry.id.as_str());
        let backwards = graph.previous_of(&entry.id) == Some(exit.id.as_str());
        assert!(forwards || backwards, "{} -> {}", link.source, link.target);
    }
}

#[test]
fn an_edited_layout_promotes_to_a_presentation() {
    let mut editing = edit_session();
    assert!(editing.begin_drag("metro-slide-05", Point::ZERO));
    editing.drag_to(Point::new(25.0, -40.0), 10);
    editing.end_drag(20);
    assert!(editing.flush(30).unwrap());
    let moved_to = editing
        .layout()
        .stop_for_slide("slide-05")
        .unwrap()
        .position;

    let exported = editing.export_positions().unwrap();
    let committed = parse_committed(&exported).unwrap();

    let mut presenting = MetroCanvas::new(
        bundled_deck(),
        bundled_topology(),
        MemoryStorage::new(),
        CanvasConfig::presentation(Some(committed)),
    )
    .unwrap();
    let stop = presenting.layout().stop_for_slide("slide-05").unwrap();
    assert_eq!(stop.position, moved_to);

    // The promoted map is frozen.
    assert!(!presenting.begin_drag("metro-slide-05", Point::ZERO));
}
