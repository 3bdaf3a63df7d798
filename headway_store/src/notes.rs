// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slide speaker notes and custom resources.

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StoreError, get_json, put_json};

const NOTES_VERSION: u32 = 1;

/// Key a slide's notes are stored under.
pub fn notes_key(slide_id: &str) -> String {
    format!("headway-slide-notes-{slide_id}")
}

/// A link the presenter attached to a slide after the fact.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CustomResource {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// Notes and attached resources for one slide.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideNotes {
    /// Free-form presenter notes.
    pub notes: String,
    /// Resources attached by the presenter, in attachment order.
    pub custom_resources: Vec<CustomResource>,
}

impl SlideNotes {
    /// Whether there is nothing worth persisting.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.custom_resources.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct NotesEnvelope {
    version: u32,
    timestamp: u64,
    data: SlideNotes,
}

/// Stores one slide's notes, stamped with the caller's clock.
pub fn save_notes(
    storage: &mut impl Storage,
    slide_id: &str,
    notes: &SlideNotes,
    timestamp: u64,
) -> Result<(), StoreError> {
    let envelope = NotesEnvelope {
        version: NOTES_VERSION,
        timestamp,
        data: notes.clone(),
    };
    put_json(storage, &notes_key(slide_id), &envelope)
}

/// Loads one slide's notes. `None` when nothing was stored or the
/// stored payload does not parse.
pub fn load_notes(
    storage: &impl Storage,
    slide_id: &str,
) -> Result<Option<SlideNotes>, StoreError> {
    let envelope: Option<NotesEnvelope> = get_json(storage, &notes_key(slide_id))?;
    Ok(envelope.map(|envelope| envelope.data))
}
