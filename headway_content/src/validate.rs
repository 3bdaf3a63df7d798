// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Referential integrity checks over a deck and its topology.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::deck::Deck;
use crate::topology::Topology;

/// A referential problem found by [`Deck::validate`].
///
/// Issues are warnings, not errors: every consumer of the deck degrades
/// gracefully when a reference dangles. Applications typically log the list
/// at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A slide names a section that does not exist.
    SlideWithUnknownSection {
        /// The offending slide.
        slide_id: String,
        /// The dangling section reference.
        section_id: String,
    },
    /// A resource names a slide that does not exist.
    ResourceWithUnknownSlide {
        /// The offending resource.
        resource_id: String,
        /// The dangling slide reference.
        slide_id: String,
    },
    /// A topology link names a section that does not exist.
    LinkWithUnknownSection {
        /// The dangling section reference.
        section_id: String,
    },
    /// A declared section has no slides. Links into it resolve to dead ends.
    EmptySection {
        /// The empty section.
        section_id: String,
    },
    /// Two slides share an id. Downstream behavior is unspecified.
    DuplicateSlideId {
        /// The repeated id.
        slide_id: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlideWithUnknownSection { slide_id, section_id } => {
                write!(
                    f,
                    "slide {slide_id:?} references unknown section {section_id:?}"
                )
            }
            Self::ResourceWithUnknownSlide { resource_id, slide_id } => {
                write!(
                    f,
                    "resource {resource_id:?} references unknown slide {slide_id:?}"
                )
            }
            Self::LinkWithUnknownSection { section_id } => {
                write!(f, "topology link references unknown section {section_id:?}")
            }
            Self::EmptySection { section_id } => {
                write!(f, "section {section_id:?} has no slides")
            }
            Self::DuplicateSlideId { slide_id } => {
                write!(f, "slide id {slide_id:?} is declared more than once")
            }
        }
    }
}

impl Deck {
    /// Reports referential problems in this deck and `topology`.
    ///
    /// An empty result means every cross-reference resolves, every declared
    /// section has at least one slide, and slide ids are unique. Issues are
    /// reported in a stable order: slides, resources, links, sections,
    /// duplicates.
    pub fn validate(&self, topology: &Topology) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for slide in self.slides() {
            if self.section(&slide.section_id).is_none() {
                issues.push(ValidationIssue::SlideWithUnknownSection {
                    slide_id: slide.id.clone(),
                    section_id: slide.section_id.clone(),
                });
            }
        }

        for resource in self.resources() {
            if self.slide(&resource.slide_id).is_none() {
                issues.push(ValidationIssue::ResourceWithUnknownSlide {
                    resource_id: resource.id.clone(),
                    slide_id: resource.slide_id.clone(),
                });
            }
        }

        for link in topology.links() {
            for section_id in [&link.source, &link.target] {
                if self.section(section_id).is_none() {
                    issues.push(ValidationIssue::LinkWithUnknownSection {
                        section_id: section_id.clone(),
                    });
                }
            }
        }

        for section in self.sections() {
            if self.first_slide_in(&section.id).is_none() {
                issues.push(ValidationIssue::EmptySection {
                    section_id: section.id.clone(),
                });
            }
        }

        let slides = self.slides();
        for (index, slide) in slides.iter().enumerate() {
            if slides[..index].iter().any(|earlier| earlier.id == slide.id) {
                issues.push(ValidationIssue::DuplicateSlideId {
                    slide_id: slide.id.clone(),
                });
            }
        }

        issues
    }
}
