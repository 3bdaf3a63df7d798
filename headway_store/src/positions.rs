// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saving, loading, and exporting dragged node positions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StoreError, get_json, put_json};

/// Key the position map is stored under.
pub const POSITIONS_KEY: &str = "headway-node-positions";

const POSITIONS_VERSION: u32 = 1;

/// A persisted node override: where the node was dragged, and for
/// resizable nodes, how it was scaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Horizontal position in map coordinates.
    pub x: f64,
    /// Vertical position in map coordinates.
    pub y: f64,
    /// Override scale, for landmark nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl NodePosition {
    /// An override at `(x, y)` with no scale change.
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, scale: None }
    }
}

/// Node id to override, sorted for stable serialization.
pub type PositionMap = BTreeMap<String, NodePosition>;

/// Envelope wrapped around the stored map. The version is written for
/// future migrations and ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct PositionsEnvelope {
    version: u32,
    timestamp: u64,
    positions: PositionMap,
}

/// Stores the position map, stamped with the caller's clock.
pub fn save_positions(
    storage: &mut impl Storage,
    positions: &PositionMap,
    timestamp: u64,
) -> Result<(), StoreError> {
    let envelope = PositionsEnvelope {
        version: POSITIONS_VERSION,
        timestamp,
        positions: positions.clone(),
    };
    put_json(storage, POSITIONS_KEY, &envelope)
}

/// Loads the stored position map.
///
/// Returns `None` when nothing was stored or the stored payload does
/// not parse as a position envelope.
pub fn load_positions(storage: &impl Storage) -> Result<Option<PositionMap>, StoreError> {
    let envelope: Option<PositionsEnvelope> = get_json(storage, POSITIONS_KEY)?;
    Ok(envelope.map(|envelope| envelope.positions))
}

/// Removes any stored position map.
pub fn clear_positions(storage: &mut impl Storage) -> Result<(), StoreError> {
    storage.remove(POSITIONS_KEY)
}

/// Renders the bare position map as pretty-printed JSON, the format
/// committed to a repository as a map's default layout.
pub fn export_positions(positions: &PositionMap) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(positions)?)
}

/// Parses a committed positions file, the inverse of
/// [`export_positions`].
pub fn parse_committed(json: &str) -> Result<PositionMap, StoreError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    fn sample() -> PositionMap {
        let mut positions = PositionMap::new();
        positions.insert("metro-slide-01".into(), NodePosition::at(100.0, 200.0));
        positions.insert(
            "landmark-doomtown".into(),
            NodePosition {
                x: 80.0,
                y: 880.0,
                scale: Some(0.8),
            },
        );
        positions
    }

    #[test]
    fn round_trips_through_the_envelope() {
        let mut storage = MemoryStorage::new();
        save_positions(&mut storage, &sample(), 1_700_000_000_000).unwrap();
        assert_eq!(load_positions(&storage).unwrap(), Some(sample()));
    }

    #[test]
    fn envelope_carries_version_and_timestamp() {
        let mut storage = MemoryStorage::new();
        save_positions(&mut storage, &sample(), 42).unwrap();

        let raw = storage.get(POSITIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["timestamp"], 42);
        assert!(value["positions"]["metro-slide-01"]["scale"].is_null());
        assert_eq!(value["positions"]["landmark-doomtown"]["scale"], 0.8);
    }

    #[test]
    fn saving_overwrites_the_previous_map() {
        let mut storage = MemoryStorage::new();
        save_positions(&mut storage, &sample(), 1).unwrap();

        let mut second = PositionMap::new();
        second.insert("metro-slide-02".into(), NodePosition::at(1.0, 2.0));
        save_positions(&mut storage, &second, 2).unwrap();

        let loaded = load_positions(&storage).unwrap().unwrap();
        assert_eq!(loaded, second);
        assert!(!loaded.contains_key("metro-slide-01"));
    }

    #[test]
    fn missing_and_malformed_both_load_as_none() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_positions(&storage).unwrap(), None);

        storage.put(POSITIONS_KEY, "invalid json {{{").unwrap();
        assert_eq!(load_positions(&storage).unwrap(), None);

        // A syntactically valid payload missing the positions field.
        storage
            .put(POSITIONS_KEY, r#"{"version":1,"timestamp":5}"#)
            .unwrap();
        assert_eq!(load_positions(&storage).unwrap(), None);
    }

    #[test]
    fn clearing_removes_the_map() {
        let mut storage = MemoryStorage::new();
        save_positions(&mut storage, &sample(), 1).unwrap();
        clear_positions(&mut storage).unwrap();
        assert_eq!(load_positions(&storage).unwrap(), None);
        // Clearing an empty store is fine too.
        clear_positions(&mut storage).unwrap();
    }

    #[test]
    fn export_and_committed_parse_are_inverses() {
        let json = export_positions(&sample()).unwrap();
        // The committed format is the bare map, no envelope.
        assert!(!json.contains("version"));
        assert_eq!(parse_committed(&json).unwrap(), sample());
    }
}
