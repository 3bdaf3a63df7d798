// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directory-backed persistence against a real filesystem.

use std::fs;

use headway_store::{
    DirStorage, NodePosition, POSITIONS_KEY, PositionMap, clear_positions, load_positions,
    save_positions,
};

#[test]
fn positions_survive_in_a_json_file() {
    let root = std::env::temp_dir().join(format!("headway-store-test-{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);

    let mut storage = DirStorage::new(&root);
    assert_eq!(load_positions(&storage).unwrap(), None);

    let mut positions = PositionMap::new();
    positions.insert("metro-slide-01".into(), NodePosition::at(140.0, 150.0));
    save_positions(&mut storage, &positions, 1_000).unwrap();

    // One file per key, named after it.
    assert!(root.join(format!("{POSITIONS_KEY}.json")).is_file());

    // A fresh handle over the same directory sees the same data.
    let reopened = DirStorage::new(&root);
    assert_eq!(load_positions(&reopened).unwrap(), Some(positions));

    clear_positions(&mut storage).unwrap();
    assert_eq!(load_positions(&storage).unwrap(), None);

    fs::remove_dir_all(&root).unwrap();
}
