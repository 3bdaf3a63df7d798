// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracking user additions and deletions of map edges.

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StoreError, get_json, put_json};

/// Key the edge edits are stored under.
pub const EDGE_EDITS_KEY: &str = "headway-edge-edits";

const EDGE_EDITS_VERSION: u32 = 1;

/// A user-drawn edge, reduced to what is needed to rebuild it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEdge {
    /// Edge id.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Attachment point on the source node, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    /// Attachment point on the target node, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// The user's additions and deletions relative to the generated map.
///
/// Deleting a user-added edge removes it from the additions rather than
/// recording a deletion, so the edits never grow from undoing yourself.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeEdits {
    /// Edges the user drew, in creation order.
    pub added_edges: Vec<StoredEdge>,
    /// Ids of generated edges the user deleted.
    pub deleted_edge_ids: Vec<String>,
}

impl EdgeEdits {
    /// Records a user-drawn edge. Re-adding a previously deleted edge id
    /// cancels the deletion.
    pub fn record_added(&mut self, edge: StoredEdge) {
        self.deleted_edge_ids.retain(|id| *id != edge.id);
        self.added_edges.push(edge);
    }

    /// Records a deletion. A user-added edge is simply dropped; a
    /// generated edge is remembered as deleted.
    pub fn record_deleted(&mut self, edge_id: &str) {
        let was_user_added = self.added_edges.iter().any(|edge| edge.id == edge_id);
        if was_user_added {
            self.added_edges.retain(|edge| edge.id != edge_id);
        } else if !self.is_deleted(edge_id) {
            self.deleted_edge_ids.push(edge_id.into());
        }
    }

    /// Whether a generated edge id is marked deleted.
    pub fn is_deleted(&self, edge_id: &str) -> bool {
        self.deleted_edge_ids.iter().any(|id| id == edge_id)
    }

    /// Whether there are no edits at all.
    pub fn is_empty(&self) -> bool {
        self.added_edges.is_empty() && self.deleted_edge_ids.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeEditsEnvelope {
    version: u32,
    timestamp: u64,
    data: EdgeEdits,
}

/// Stores the edge edits, stamped with the caller's clock.
pub fn save_edge_edits(
    storage: &mut impl Storage,
    edits: &EdgeEdits,
    timestamp: u64,
) -> Result<(), StoreError> {
    let envelope = EdgeEditsEnvelope {
        version: EDGE_EDITS_VERSION,
        timestamp,
        data: edits.clone(),
    };
    put_json(storage, EDGE_EDITS_KEY, &envelope)
}

/// Loads the stored edge edits. `None` when nothing was stored or the
/// stored payload does not parse.
pub fn load_edge_edits(storage: &impl Storage) -> Result<Option<EdgeEdits>, StoreError> {
    let envelope: Option<EdgeEditsEnvelope> = get_json(storage, EDGE_EDITS_KEY)?;
    Ok(envelope.map(|envelope| envelope.data))
}

/// Removes any stored edge edits.
pub fn clear_edge_edits(storage: &mut impl Storage) -> Result<(), StoreError> {
    storage.remove(EDGE_EDITS_KEY)
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    fn drawn(id: &str) -> StoredEdge {
        StoredEdge {
            id: id.into(),
            source: "metro-slide-03".into(),
            target: "metro-slide-09".into(),
            source_handle: Some("right".into()),
            target_handle: Some("left".into()),
        }
    }

    #[test]
    fn deleting_a_generated_edge_is_remembered() {
        let mut edits = EdgeEdits::default();
        edits.record_deleted("edge-mapping-to-levels-tech");
        edits.record_deleted("edge-mapping-to-levels-tech");
        assert_eq!(edits.deleted_edge_ids.len(), 1);
        assert!(edits.is_deleted("edge-mapping-to-levels-tech"));
    }

    #[test]
    fn deleting_a_drawn_edge_just_drops_it() {
        let mut edits = EdgeEdits::default();
        edits.record_added(drawn("user-edge-1"));
        edits.record_deleted("user-edge-1");
        assert!(edits.is_empty());
    }

    #[test]
    fn redrawing_a_deleted_edge_cancels_the_deletion() {
        let mut edits = EdgeEdits::default();
        edits.record_deleted("edge-a-b");
        edits.record_added(drawn("edge-a-b"));
        assert!(!edits.is_deleted("edge-a-b"));
        assert_eq!(edits.added_edges.len(), 1);
    }

    #[test]
    fn round_trips_in_camel_case() {
        let mut storage = MemoryStorage::new();
        let mut edits = EdgeEdits::default();
        edits.record_added(drawn("user-edge-1"));
        edits.record_deleted("edge-gen-2");
        save_edge_edits(&mut storage, &edits, 9).unwrap();

        let raw = storage.get(EDGE_EDITS_KEY).unwrap().unwrap();
        assert!(raw.contains("addedEdges"));
        assert!(raw.contains("deletedEdgeIds"));
        assert!(raw.contains("sourceHandle"));

        assert_eq!(load_edge_edits(&storage).unwrap(), Some(edits));

        clear_edge_edits(&mut storage).unwrap();
        assert_eq!(load_edge_edits(&storage).unwrap(), None);
    }
}
