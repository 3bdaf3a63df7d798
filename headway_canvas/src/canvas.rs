// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas session: one deck, one map, one presenter.

use kurbo::Point;

use headway_content::{Deck, Topology};
use headway_layout::{
    EdgeKind, EdgeStyle, Handle, MetroLayout, NodeData, NodeFlags, StopExpansion, VisualEdge,
    VisualNode, expand_stop, generate_metro_layout, geometry, stop_node_id,
};
use headway_nav::{FitOptions, NavController, NavKey, ViewportRequest};
use headway_store::{
    Debounce, EdgeEdits, NodePosition, PositionMap, SlideNotes, Storage, StoreError, StoredEdge,
    clear_positions, load_edge_edits, load_notes, load_positions, save_edge_edits, save_notes,
    save_positions,
};
use headway_zoom::ZoomPresentation;

use crate::config::CanvasConfig;
use crate::drag::NodeDrag;

/// Lowest zoom the viewport may reach.
pub const MIN_ZOOM: f64 = 0.1;

/// Highest zoom the viewport may reach.
pub const MAX_ZOOM: f64 = 3.0;

/// Stroke width of user-drawn edges.
const USER_EDGE_WIDTH: f64 = 2.0;

/// An interactive metro-map session over one deck.
///
/// The session owns the generated layout with position overrides
/// already applied, the navigation controller, and the persistence
/// state. It is headless: hosts feed it pointer, keyboard, and clock
/// input and render from [`nodes`](Self::nodes) and
/// [`edges`](Self::edges), draining viewport requests as they appear.
#[derive(Debug)]
pub struct MetroCanvas<S: Storage> {
    deck: Deck,
    topology: Topology,
    layout: MetroLayout,
    nav: NavController,
    storage: S,
    config: CanvasConfig,
    zoom: f64,
    overrides: PositionMap,
    save_debounce: Debounce,
    edge_edits: EdgeEdits,
    expanded: Option<String>,
    expansion: Option<StopExpansion>,
    drag: NodeDrag,
}

impl<S: Storage> MetroCanvas<S> {
    /// Opens a session: generates the map, applies the committed layout
    /// and, in edit mode, any stored overrides on top, then restores
    /// stored edge edits. Referential problems in the deck are logged
    /// as warnings, never errors.
    pub fn new(
        deck: Deck,
        topology: Topology,
        storage: S,
        config: CanvasConfig,
    ) -> Result<Self, StoreError> {
        for issue in deck.validate(&topology) {
            log::warn!("deck validation: {issue}");
        }

        let mut layout = generate_metro_layout(&deck, &topology);
        if let Some(committed) = &config.committed_positions {
            for (id, position) in committed {
                apply_override(&mut layout, id, position);
            }
        }

        let mut overrides = PositionMap::new();
        if config.edit_mode {
            if let Some(stored) = load_positions(&storage)? {
                for (id, position) in &stored {
                    apply_override(&mut layout, id, position);
                }
                overrides = stored;
            }
        }

        let edge_edits = load_edge_edits(&storage)?.unwrap_or_default();
        let save_debounce = Debounce::new(config.save_delay_ms);
        let nav = NavController::new(&deck, &topology);
        Ok(Self {
            deck,
            topology,
            layout,
            nav,
            storage,
            config,
            zoom: 1.0,
            overrides,
            save_debounce,
            edge_edits,
            expanded: None,
            expansion: None,
            drag: NodeDrag::default(),
        })
    }

    /// The deck this session presents.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The layout with all position overrides applied.
    pub fn layout(&self) -> &MetroLayout {
        &self.layout
    }

    /// The session configuration.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The navigation controller.
    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    /// Mutable access to the navigation controller, for hosts that
    /// drive navigation beyond the canvas's own delegations.
    pub fn nav_mut(&mut self) -> &mut NavController {
        &mut self.nav
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current edge edits.
    pub fn edge_edits(&self) -> &EdgeEdits {
        &self.edge_edits
    }

    /// Every node to render, in paint order: the merged layout plus the
    /// expansion overlay when a stop is expanded.
    pub fn nodes(&self) -> Vec<VisualNode> {
        let mut nodes = self.layout.nodes.clone();
        if let Some(expansion) = &self.expansion {
            nodes.extend(expansion.nodes.iter().cloned());
        }
        nodes
    }

    /// Every edge to render, in paint order: the generated edges minus
    /// deletions, plus user-drawn edges and the expansion overlay.
    pub fn edges(&self) -> Vec<VisualEdge> {
        let mut edges: Vec<VisualEdge> = self
            .layout
            .edges
            .iter()
            .filter(|edge| !self.edge_edits.is_deleted(&edge.id))
            .cloned()
            .collect();
        edges.extend(self.edge_edits.added_edges.iter().map(user_edge));
        if let Some(expansion) = &self.expansion {
            edges.extend(expansion.edges.iter().cloned());
        }
        edges
    }

    /// Reacts to a click on a node. A stop click navigates to its slide
    /// and requests a close-up fit; clicks elsewhere are ignored.
    pub fn on_stop_clicked(&mut self, node_id: &str) -> bool {
        let Some(slide_id) = self.layout.node(node_id).and_then(VisualNode::slide_id) else {
            return false;
        };
        log::debug!("stop {node_id} focuses slide {slide_id}");
        self.nav
            .navigate_to_slide_with(slide_id, FitOptions::CLOSE_UP);
        true
    }

    /// Feeds a key press through the navigation keymap.
    pub fn on_key(&mut self, key: NavKey) -> bool {
        self.nav.on_key(key)
    }

    /// Tells the session which slide the settled viewport centers on.
    pub fn on_viewport_settled(&mut self, slide_id: &str) {
        self.nav.set_active_slide(slide_id);
    }

    /// Drains viewport requests queued by navigation.
    pub fn take_viewport_requests(&mut self) -> Vec<ViewportRequest> {
        self.nav.take_requests()
    }

    /// Current viewport zoom.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Records the viewport zoom reported by the host, clamped to the
    /// session's zoom range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// How a stop's zoom-gated content presents right now.
    ///
    /// The expanded stop presents fully; while any stop is expanded the
    /// others render with the constrained thumbnail cap.
    pub fn stop_presentation(&self, slide_id: &str) -> ZoomPresentation {
        let expanded = self.expanded.as_deref() == Some(slide_id);
        let constrained = self.expanded.is_some() && !expanded;
        ZoomPresentation::at(self.zoom, constrained, expanded)
    }

    /// Starts dragging a node. Refused outside edit mode and for nodes
    /// that are not draggable.
    pub fn begin_drag(&mut self, node_id: &str, pointer: Point) -> bool {
        if !self.config.edit_mode {
            return false;
        }
        let Some(node) = self.layout.node(node_id) else {
            return false;
        };
        if !node.flags.contains(NodeFlags::DRAGGABLE) {
            return false;
        }
        self.drag.begin(node_id, pointer);
        true
    }

    /// Moves the active drag to `pointer`, updating the node, its
    /// override, and the save debounce.
    pub fn drag_to(&mut self, pointer: Point, now_ms: u64) {
        let Some(delta) = self.drag.update(pointer) else {
            return;
        };
        let Some(node_id) = self.drag.node().map(String::from) else {
            return;
        };
        let Some(node) = self.layout.node_mut(&node_id) else {
            return;
        };
        node.position += delta;
        let position = node.position;
        let scale = self.overrides.get(&node_id).and_then(|entry| entry.scale);
        self.overrides.insert(
            node_id.clone(),
            NodePosition {
                x: position.x,
                y: position.y,
                scale,
            },
        );
        self.save_debounce.mark(now_ms);

        // The expansion overlay follows its stop.
        let expanded_stop = self.expanded.as_deref().map(stop_node_id);
        if expanded_stop.as_deref() == Some(node_id.as_str()) {
            self.refresh_expansion();
        }
    }

    /// Ends the active drag, leaving the save debounce armed.
    pub fn end_drag(&mut self, now_ms: u64) {
        if self.drag.is_active() {
            self.drag.end();
            self.save_debounce.mark(now_ms);
        }
    }

    /// Overrides a landmark's scale. Refused outside edit mode and for
    /// non-landmark nodes.
    pub fn set_node_scale(&mut self, node_id: &str, scale: f64, now_ms: u64) -> bool {
        if !self.config.edit_mode {
            return false;
        }
        let Some(node) = self.layout.node_mut(node_id) else {
            return false;
        };
        let NodeData::Landmark {
            scale: node_scale, ..
        } = &mut node.data
        else {
            return false;
        };
        *node_scale = scale;
        let position = node.position;
        self.overrides.insert(
            node_id.into(),
            NodePosition {
                x: position.x,
                y: position.y,
                scale: Some(scale),
            },
        );
        self.save_debounce.mark(now_ms);
        true
    }

    /// Runs the save debounce, persisting dirty positions once the
    /// quiet period has elapsed. Returns whether a save happened.
    pub fn tick(&mut self, now_ms: u64) -> Result<bool, StoreError> {
        if !self.save_debounce.poll(now_ms) {
            return Ok(false);
        }
        self.persist_positions(now_ms)?;
        Ok(true)
    }

    /// Persists dirty positions immediately, if any are pending. Hosts
    /// call this on shutdown so a quick exit never loses a drag.
    pub fn flush(&mut self, now_ms: u64) -> Result<bool, StoreError> {
        if !self.save_debounce.pending() {
            return Ok(false);
        }
        self.save_debounce.cancel();
        self.persist_positions(now_ms)?;
        Ok(true)
    }

    /// Discards every position override, stored and live, and restores
    /// the generated layout (plus the committed defaults, if any).
    pub fn reset_positions(&mut self) -> Result<(), StoreError> {
        clear_positions(&mut self.storage)?;
        self.overrides.clear();
        self.save_debounce.cancel();
        self.layout = generate_metro_layout(&self.deck, &self.topology);
        if let Some(committed) = &self.config.committed_positions {
            for (id, position) in committed {
                apply_override(&mut self.layout, id, position);
            }
        }
        self.refresh_expansion();
        Ok(())
    }

    /// Renders the current overrides as committed-layout JSON.
    pub fn export_positions(&self) -> Result<String, StoreError> {
        headway_store::export_positions(&self.overrides)
    }

    /// Draws a new edge between two nodes and persists the edit.
    /// Returns the new edge's id, or `None` when refused (outside edit
    /// mode, unknown endpoints, or the edge already exists).
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<Handle>,
        target_handle: Option<Handle>,
        now_ms: u64,
    ) -> Result<Option<String>, StoreError> {
        if !self.config.edit_mode {
            return Ok(None);
        }
        if self.layout.node(source).is_none() || self.layout.node(target).is_none() {
            return Ok(None);
        }
        let id = format!("user-{source}-{target}");
        if self.edge_edits.added_edges.iter().any(|edge| edge.id == id) {
            return Ok(None);
        }
        self.edge_edits.record_added(StoredEdge {
            id: id.clone(),
            source: source.into(),
            target: target.into(),
            source_handle: source_handle.map(|handle| handle.as_str().into()),
            target_handle: target_handle.map(|handle| handle.as_str().into()),
        });
        save_edge_edits(&mut self.storage, &self.edge_edits, now_ms)?;
        Ok(Some(id))
    }

    /// Deletes a generated or user-drawn edge and persists the edit.
    /// Returns whether the edge existed.
    pub fn delete_edge(&mut self, edge_id: &str, now_ms: u64) -> Result<bool, StoreError> {
        if !self.config.edit_mode {
            return Ok(false);
        }
        let known = self.layout.edge(edge_id).is_some()
            || self.edge_edits.added_edges.iter().any(|e| e.id == edge_id);
        if !known {
            return Ok(false);
        }
        self.edge_edits.record_deleted(edge_id);
        save_edge_edits(&mut self.storage, &self.edge_edits, now_ms)?;
        Ok(true)
    }

    /// Expands a stop into its content fan, or collapses it when it is
    /// already expanded. Returns whether the stop is now expanded.
    pub fn toggle_expansion(&mut self, slide_id: &str) -> bool {
        if self.expanded.as_deref() == Some(slide_id) {
            self.expanded = None;
            self.expansion = None;
            return false;
        }
        let stop = self.layout.stop_for_slide(slide_id);
        let expansion = stop.and_then(|node| expand_stop(&self.deck, slide_id, node.position));
        let opened = expansion.is_some();
        self.expanded = opened.then(|| slide_id.into());
        self.expansion = expansion;
        opened
    }

    /// The slide whose stop is expanded, if any.
    pub fn expanded_slide(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// The active expansion overlay, if any.
    pub fn expansion(&self) -> Option<&StopExpansion> {
        self.expansion.as_ref()
    }

    /// A slide's stored notes, or empty defaults.
    pub fn notes_for(&self, slide_id: &str) -> Result<SlideNotes, StoreError> {
        Ok(load_notes(&self.storage, slide_id)?.unwrap_or_default())
    }

    /// Stores a slide's notes.
    pub fn save_notes_for(
        &mut self,
        slide_id: &str,
        notes: &SlideNotes,
        now_ms: u64,
    ) -> Result<(), StoreError> {
        save_notes(&mut self.storage, slide_id, notes, now_ms)
    }

    fn persist_positions(&mut self, now_ms: u64) -> Result<(), StoreError> {
        save_positions(&mut self.storage, &self.overrides, now_ms)?;
        log::debug!("saved {} node position overrides", self.overrides.len());
        Ok(())
    }

    fn refresh_expansion(&mut self) {
        let Some(slide_id) = self.expanded.clone() else {
            self.expansion = None;
            return;
        };
        let origin = self
            .layout
            .stop_for_slide(&slide_id)
            .map(|node| node.position);
        self.expansion = origin.and_then(|origin| expand_stop(&self.deck, &slide_id, origin));
    }
}

/// Applies one stored override to the layout. Overrides naming nodes
/// the layout no longer has are ignored, so stale persistence survives
/// deck changes.
fn apply_override(layout: &mut MetroLayout, node_id: &str, position: &NodePosition) {
    let Some(node) = layout.node_mut(node_id) else {
        log::debug!("ignoring stored position for unknown node {node_id}");
        return;
    };
    node.position = Point::new(position.x, position.y);
    if let (Some(scale), NodeData::Landmark { scale: node_scale, .. }) =
        (position.scale, &mut node.data)
    {
        *node_scale = scale;
    }
}

/// Rebuilds a user-drawn edge for rendering. User edges route like
/// connectors but stay thin and neutral so they read as annotations,
/// not lines.
fn user_edge(stored: &StoredEdge) -> VisualEdge {
    VisualEdge {
        id: stored.id.clone(),
        source: stored.source.clone(),
        target: stored.target.clone(),
        source_handle: stored.source_handle.as_deref().and_then(Handle::parse),
        target_handle: stored.target_handle.as_deref().and_then(Handle::parse),
        kind: EdgeKind::Connector {
            radius: geometry::EDGE_BORDER_RADIUS,
            offset: geometry::CONNECTOR_OFFSET,
        },
        style: EdgeStyle {
            color: geometry::FALLBACK_LINE_COLOR,
            width: USER_EDGE_WIDTH,
            dash: None,
        },
    }
}
