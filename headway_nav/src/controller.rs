// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation state machine and its viewport-request outbox.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use headway_content::{Deck, Topology};

use crate::graph::NavGraph;

/// Fit parameters attached to a [`ViewportRequest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Fraction of the viewport left free around the fitted content.
    pub padding: f64,
    /// Lower zoom bound for the fit, if any.
    pub min_zoom: Option<f64>,
    /// Upper zoom bound for the fit, if any.
    pub max_zoom: Option<f64>,
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
}

impl FitOptions {
    /// Centering on one slide during ordinary navigation.
    pub const FOCUS: Self = Self {
        padding: 0.3,
        min_zoom: None,
        max_zoom: Some(1.5),
        duration_ms: 500,
    };

    /// Fitting the whole map for overview mode.
    pub const OVERVIEW: Self = Self {
        padding: 0.05,
        min_zoom: Some(0.1),
        max_zoom: Some(1.0),
        duration_ms: 500,
    };

    /// The tighter fit used when a stop is clicked directly.
    pub const CLOSE_UP: Self = Self {
        padding: 0.5,
        min_zoom: None,
        max_zoom: Some(2.0),
        duration_ms: 500,
    };
}

/// What a [`ViewportRequest`] asks the host to frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewportTarget {
    /// Center on the node carrying this slide.
    Slide(String),
    /// Fit every node on the map.
    All,
}

/// One queued viewport action.
///
/// The controller never calls into rendering; it queues these and the host
/// drains them with [`NavController::take_requests`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportRequest {
    /// What to frame.
    pub target: ViewportTarget,
    /// How to frame it.
    pub options: FitOptions,
}

/// Presentation navigation state.
///
/// Tracks the current slide and overview mode, steps along the
/// [`NavGraph`], and queues [`ViewportRequest`]s. Construction snapshots
/// the deck's section and slide order, so the controller owns no borrows
/// and can outlive the deck reference it was built from.
#[derive(Clone, Debug)]
pub struct NavController {
    graph: NavGraph,
    sections: Vec<String>,
    slides_by_section: HashMap<String, Vec<String>>,
    section_of: HashMap<String, String>,
    current: Option<String>,
    overview: bool,
    suppress_settle: bool,
    requests: Vec<ViewportRequest>,
}

impl NavController {
    /// Creates a controller positioned on the deck's first slide.
    pub fn new(deck: &Deck, topology: &Topology) -> Self {
        let graph = NavGraph::build(deck, topology);
        let sections = deck
            .sections()
            .iter()
            .map(|section| section.id.clone())
            .collect();
        let mut slides_by_section: HashMap<String, Vec<String>> = HashMap::new();
        let mut section_of = HashMap::new();
        for slide in deck.slides() {
            slides_by_section
                .entry(slide.section_id.clone())
                .or_default()
                .push(slide.id.clone());
            section_of.insert(slide.id.clone(), slide.section_id.clone());
        }
        let current = deck
            .sections()
            .iter()
            .find_map(|section| deck.first_slide_in(&section.id))
            .map(|slide| slide.id.clone());
        Self {
            graph,
            sections,
            slides_by_section,
            section_of,
            current,
            overview: false,
            suppress_settle: false,
            requests: Vec::new(),
        }
    }

    /// The slide navigation is currently on, if any.
    pub fn current_slide(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Section of the current slide, if any.
    pub fn current_section(&self) -> Option<&str> {
        let current = self.current.as_deref()?;
        self.section_of.get(current).map(String::as_str)
    }

    /// Whether overview mode is active.
    pub fn is_overview(&self) -> bool {
        self.overview
    }

    /// The traversal graph built at construction.
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Whether [`Self::go_to_next`] would move.
    pub fn can_go_next(&self) -> bool {
        self.current
            .as_deref()
            .and_then(|id| self.graph.next_of(id))
            .is_some()
    }

    /// Whether [`Self::go_to_previous`] would move.
    pub fn can_go_previous(&self) -> bool {
        self.current
            .as_deref()
            .and_then(|id| self.graph.previous_of(id))
            .is_some()
    }

    /// Navigates to `id` with the standard focus fit.
    ///
    /// Unknown ids are ignored.
    pub fn navigate_to_slide(&mut self, id: &str) {
        self.navigate_to_slide_with(id, FitOptions::FOCUS);
    }

    /// Navigates to `id` with explicit fit options.
    ///
    /// Sets the current slide, leaves overview mode, and queues a centering
    /// request. Unknown ids are ignored.
    pub fn navigate_to_slide_with(&mut self, id: &str, options: FitOptions) {
        if !self.section_of.contains_key(id) {
            return;
        }
        self.current = Some(String::from(id));
        self.overview = false;
        self.request(ViewportTarget::Slide(String::from(id)), options);
    }

    /// Navigates to the first slide of `section_id`.
    ///
    /// No-op when the section is unknown or has no slides.
    pub fn navigate_to_section(&mut self, section_id: &str) {
        let first = self
            .slides_by_section
            .get(section_id)
            .and_then(|slides| slides.first())
            .cloned();
        if let Some(first) = first {
            self.navigate_to_slide(&first);
        }
    }

    /// Steps forwards along the graph. No-op at a dead end.
    pub fn go_to_next(&mut self) {
        let next = self
            .current
            .as_deref()
            .and_then(|id| self.graph.next_of(id))
            .map(String::from);
        if let Some(next) = next {
            self.navigate_to_slide(&next);
        }
    }

    /// Steps backwards along the graph. No-op at a dead end.
    pub fn go_to_previous(&mut self) {
        let previous = self
            .current
            .as_deref()
            .and_then(|id| self.graph.previous_of(id))
            .map(String::from);
        if let Some(previous) = previous {
            self.navigate_to_slide(&previous);
        }
    }

    /// Moves to the next slide within the current section. No-op at the end.
    pub fn next_in_section(&mut self) {
        self.step_in_section(1);
    }

    /// Moves to the previous slide within the current section. No-op at the
    /// start.
    pub fn previous_in_section(&mut self) {
        self.step_in_section(-1);
    }

    /// Jumps to the first slide of the next section in deck order.
    pub fn next_section(&mut self) {
        self.step_section(1);
    }

    /// Jumps to the first slide of the previous section in deck order.
    pub fn previous_section(&mut self) {
        self.step_section(-1);
    }

    /// Jumps to the first slide of the section at `index` in deck order.
    ///
    /// Out-of-range indices are ignored.
    pub fn jump_to_section(&mut self, index: usize) {
        if let Some(section) = self.sections.get(index).cloned() {
            self.navigate_to_section(&section);
        }
    }

    /// Flips overview mode.
    ///
    /// Entering queues a fit-all request; leaving re-centers on the current
    /// slide without changing it.
    pub fn toggle_overview(&mut self) {
        if self.overview {
            self.overview = false;
            if let Some(current) = self.current.clone() {
                self.request(ViewportTarget::Slide(current), FitOptions::FOCUS);
            }
        } else {
            self.overview = true;
            self.request(ViewportTarget::All, FitOptions::OVERVIEW);
        }
    }

    /// Re-centers on the current slide, leaving overview mode.
    ///
    /// No-op when nothing is current.
    pub fn fit_current(&mut self) {
        if let Some(current) = self.current.clone() {
            self.overview = false;
            self.request(ViewportTarget::Slide(current), FitOptions::FOCUS);
        }
    }

    /// Adopts `id` as current without queuing any viewport action.
    ///
    /// This is the host's viewport-settled path, keeping state in sync with
    /// free-form panning. The settle that follows a programmatic move is
    /// consumed by the suppression flag instead of re-entering here, so the
    /// two sources of truth never fight. Unknown ids are ignored.
    pub fn set_active_slide(&mut self, id: &str) {
        if self.suppress_settle {
            self.suppress_settle = false;
            return;
        }
        if self.section_of.contains_key(id) {
            self.current = Some(String::from(id));
        }
    }

    /// Drains the queued viewport requests, oldest first.
    pub fn take_requests(&mut self) -> Vec<ViewportRequest> {
        core::mem::take(&mut self.requests)
    }

    fn request(&mut self, target: ViewportTarget, options: FitOptions) {
        self.suppress_settle = true;
        self.requests.push(ViewportRequest { target, options });
    }

    fn step_in_section(&mut self, delta: isize) {
        let Some(target) = self.adjacent_in_section(delta) else {
            return;
        };
        self.navigate_to_slide(&target);
    }

    fn adjacent_in_section(&self, delta: isize) -> Option<String> {
        let current = self.current.as_deref()?;
        let section = self.section_of.get(current)?;
        let slides = self.slides_by_section.get(section)?;
        let index = slides.iter().position(|id| id == current)?;
        let target = index.checked_add_signed(delta)?;
        slides.get(target).cloned()
    }

    fn step_section(&mut self, delta: isize) {
        let Some(section) = self.adjacent_section(delta) else {
            return;
        };
        self.navigate_to_section(&section);
    }

    fn adjacent_section(&self, delta: isize) -> Option<String> {
        let current = self.current.as_deref()?;
        let section = self.section_of.get(current)?;
        let index = self.sections.iter().position(|id| id == section)?;
        let target = index.checked_add_signed(delta)?;
        self.sections.get(target).cloned()
    }
}
