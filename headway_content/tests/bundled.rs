// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integrity checks for the bundled presentation.

use headway_content::{Anchor, LinkRole, Orientation, bundled_deck, bundled_topology};

#[test]
fn deck_and_topology_validate_clean() {
    let deck = bundled_deck();
    let topology = bundled_topology();
    let issues = deck.validate(&topology);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn trunk_runs_in_declaration_order() {
    let deck = bundled_deck();
    let ids: Vec<&str> = deck.sections().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "intro",
            "understanding",
            "mapping",
            "levels-nontech",
            "levels-tech",
            "projects",
            "closing"
        ]
    );
}

#[test]
fn mapping_forks_into_both_tracks() {
    let topology = bundled_topology();
    let targets: Vec<&str> = topology
        .links_from("mapping")
        .map(|l| l.target.as_str())
        .collect();
    assert_eq!(targets, ["levels-nontech", "levels-tech"]);
}

#[test]
fn closing_merges_three_ways_with_one_primary() {
    let topology = bundled_topology();
    let merges: Vec<_> = topology.links_into("closing").collect();
    assert_eq!(merges.len(), 3);
    let primaries: Vec<&str> = merges
        .iter()
        .filter(|l| matches!(l.role, LinkRole::Merge { primary: true }))
        .map(|l| l.source.as_str())
        .collect();
    assert_eq!(primaries, ["levels-tech"]);
}

#[test]
fn projects_spur_leaves_the_first_technical_stop() {
    let topology = bundled_topology();
    let spur = topology
        .links_from("levels-tech")
        .find(|l| l.target == "projects")
        .expect("projects spur");
    assert_eq!(spur.source_anchor, Anchor::First);
    assert_eq!(spur.orientation, Orientation::Drop);
    assert!(!spur.advances());
    assert!(spur.supplies_previous());
}

#[test]
fn scenic_link_never_navigates() {
    let topology = bundled_topology();
    let scenic = topology
        .links_from("levels-nontech")
        .find(|l| l.role == LinkRole::Scenic)
        .expect("scenic link");
    assert_eq!(scenic.target, "levels-tech");
    assert!(!scenic.advances());
    assert!(!scenic.supplies_previous());
}

#[test]
fn every_resource_points_at_a_real_slide() {
    let deck = bundled_deck();
    for resource in deck.resources() {
        assert!(
            deck.slide(&resource.slide_id).is_some(),
            "resource {} dangles",
            resource.id
        );
    }
}

#[test]
fn ports_come_in_threes() {
    let deck = bundled_deck();
    let ports = deck
        .landmarks()
        .iter()
        .filter(|l| l.id.starts_with("landmark-port-"))
        .count();
    assert_eq!(ports, 3);
}
