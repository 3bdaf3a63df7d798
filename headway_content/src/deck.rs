// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Deck`]: one presentation's worth of content.

use alloc::vec::Vec;

use crate::types::{Landmark, Resource, Section, Slide};

/// An immutable presentation: sections, slides, resources, and landmarks.
///
/// Declaration order carries meaning. Section order is the trunk order used
/// for section-jump navigation, and slide order within a section is the stop
/// order along that line. All lookups are linear scans; decks are small and
/// read-heavy, so no indexes are kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    sections: Vec<Section>,
    slides: Vec<Slide>,
    resources: Vec<Resource>,
    landmarks: Vec<Landmark>,
}

impl Deck {
    /// Creates a deck from its parts.
    pub fn new(
        sections: Vec<Section>,
        slides: Vec<Slide>,
        resources: Vec<Resource>,
        landmarks: Vec<Landmark>,
    ) -> Self {
        Self {
            sections,
            slides,
            resources,
            landmarks,
        }
    }

    /// All sections, in trunk order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All slides, in declaration order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// All resources.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// All landmarks.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Looks up a slide by id.
    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    /// Position of a section in trunk order.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Slides belonging to `section_id`, in stop order.
    pub fn slides_in(&self, section_id: &str) -> impl Iterator<Item = &Slide> {
        self.slides
            .iter()
            .filter(move |slide| slide.section_id == section_id)
    }

    /// First slide of a section, if the section has any.
    pub fn first_slide_in(&self, section_id: &str) -> Option<&Slide> {
        self.slides_in(section_id).next()
    }

    /// Last slide of a section, if the section has any.
    pub fn last_slide_in(&self, section_id: &str) -> Option<&Slide> {
        self.slides_in(section_id).last()
    }

    /// Resources attached to `slide_id`.
    pub fn resources_for(&self, slide_id: &str) -> impl Iterator<Item = &Resource> {
        self.resources
            .iter()
            .filter(move |resource| resource.slide_id == slide_id)
    }

    /// Featured resources attached to `slide_id`, in declaration order.
    pub fn featured_resources_for(&self, slide_id: &str) -> impl Iterator<Item = &Resource> {
        self.resources_for(slide_id).filter(|r| r.featured)
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
