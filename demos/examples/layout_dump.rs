// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dump the generated metro layout for the bundled deck.
//!
//! Prints a census of the map, then every stop with its line color and
//! junction ring, and finally the stop positions as committed-layout
//! JSON ready to check in.
//!
//! Run:
//! - `cargo run -p headway_demos --example layout_dump`

use headway_content::{bundled_deck, bundled_topology};
use headway_layout::{EdgeKind, NodeData, generate_metro_layout};
use headway_store::{NodePosition, PositionMap, export_positions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let deck = bundled_deck();
    let layout = generate_metro_layout(&deck, &bundled_topology());

    let mut stops = 0;
    let mut icons = 0;
    let mut labels = 0;
    let mut landmarks = 0;
    let mut waypoints = 0;
    for node in &layout.nodes {
        match node.data {
            NodeData::Stop(_) => stops += 1,
            NodeData::ResourceIcon { .. } => icons += 1,
            NodeData::LineLabel { .. } => labels += 1,
            NodeData::Landmark { .. } => landmarks += 1,
            NodeData::RiverWaypoint { .. } => waypoints += 1,
            NodeData::Subnode(_) | NodeData::Background { .. } => {}
        }
    }
    println!(
        "{} nodes: {stops} stops, {icons} resource icons, {labels} line labels, \
         {landmarks} landmarks, {waypoints} river waypoints",
        layout.nodes.len()
    );

    let mut lines = 0;
    let mut connectors = 0;
    let mut resource_links = 0;
    let mut river = 0;
    for edge in &layout.edges {
        match edge.kind {
            EdgeKind::MetroLine { .. } => lines += 1,
            EdgeKind::Connector { .. } => connectors += 1,
            EdgeKind::ResourceLink => resource_links += 1,
            EdgeKind::River { .. } => river += 1,
            EdgeKind::SubnodeBranch { .. } | EdgeKind::Arc { .. } => {}
        }
    }
    println!(
        "{} edges: {lines} line segments, {connectors} connectors, \
         {resource_links} resource links, {river} river spans",
        layout.edges.len()
    );

    println!();
    for node in layout.stops() {
        let NodeData::Stop(data) = &node.data else {
            continue;
        };
        let ring = if data.junction_colors.is_empty() {
            String::new()
        } else {
            format!("  junction x{}", data.junction_colors.len())
        };
        println!(
            "{:<16} ({:>6.1}, {:>6.1})  {:?}{ring}",
            node.id,
            node.position.x,
            node.position.y,
            data.color
        );
    }

    // The same export a host offers from its editor UI.
    let mut positions = PositionMap::new();
    for node in layout.stops() {
        positions.insert(
            node.id.clone(),
            NodePosition::at(node.position.x, node.position.y),
        );
    }
    println!();
    println!("{}", export_positions(&positions)?);
    Ok(())
}
