// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An editing session backed by a directory of JSON files.
//!
//! Drags a stop, waits out the save debounce, rewires an edge, then
//! reopens the session to show everything coming back from disk.
//!
//! Run:
//! - `cargo run -p headway_demos --example edit_session`

use kurbo::Point;

use headway_canvas::{CanvasConfig, MetroCanvas};
use headway_content::{bundled_deck, bundled_topology};
use headway_layout::Handle;
use headway_store::DirStorage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let root = std::env::temp_dir().join("headway-demo-session");
    let _ = std::fs::remove_dir_all(&root);
    println!("session data under {}", root.display());

    let mut canvas = MetroCanvas::new(
        bundled_deck(),
        bundled_topology(),
        DirStorage::new(&root),
        CanvasConfig::default(),
    )?;

    // Nudge the first stop 60 px right across three pointer samples.
    // Timestamps are milliseconds; the host clock would supply them.
    canvas.begin_drag("metro-slide-01", Point::ZERO);
    canvas.drag_to(Point::new(20.0, 0.0), 100);
    canvas.drag_to(Point::new(40.0, 0.0), 130);
    canvas.drag_to(Point::new(60.0, 0.0), 160);
    canvas.end_drag(200);

    // Nothing hits disk until the debounce quiets down.
    assert!(!canvas.tick(400)?);
    assert!(canvas.tick(700)?);
    println!("positions saved after the quiet period");

    // Swap the scenic link between the two track sections for a direct
    // shortcut drawn by hand.
    canvas.delete_edge("edge-levels-nontech-to-levels-tech", 800)?;
    let drawn = canvas.add_edge(
        "metro-slide-09",
        "metro-slide-16",
        Some(Handle::Bottom),
        Some(Handle::Top),
        820,
    )?;
    println!("drew {}", drawn.as_deref().unwrap_or("nothing"));

    let edge_count = canvas.edges().len();
    drop(canvas);

    // A fresh session over the same directory sees every edit.
    let reopened = MetroCanvas::new(
        bundled_deck(),
        bundled_topology(),
        DirStorage::new(&root),
        CanvasConfig::default(),
    )?;
    let stop = reopened
        .layout()
        .stop_for_slide("slide-01")
        .ok_or("missing stop")?;
    println!(
        "reopened: slide-01 at ({}, {}), {} edges",
        stop.position.x,
        stop.position.y,
        reopened.edges().len()
    );
    assert_eq!(reopened.edges().len(), edge_count);

    // The rearranged layout, ready to commit as the deck's default.
    println!();
    println!("{}", reopened.export_positions()?);
    Ok(())
}
