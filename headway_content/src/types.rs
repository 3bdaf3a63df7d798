// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core content types: sections, slides, resources, and landmarks.

use alloc::string::String;
use alloc::vec::Vec;

/// Semantic category of a section.
///
/// The two parallel "levels" lines carry distinct tracks; trunk sections that
/// every path passes through are [`Track::General`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    /// The non-technical levels track.
    NonTechnical,
    /// The technical levels track.
    Technical,
    /// Shared trunk sections such as the introduction and closing.
    General,
}

/// A named grouping of slides, rendered as one metro line segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Unique section identifier, e.g. `"levels-tech"`.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Track this section belongs to.
    pub track: Track,
}

impl Section {
    /// Creates a section.
    pub fn new(id: impl Into<String>, title: impl Into<String>, track: Track) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            track,
        }
    }
}

/// Visual treatment of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
    /// Large opening slide.
    Title,
    /// Divider introducing a section.
    SectionHeader,
    /// Regular bulleted content.
    Content,
    /// A single quotation.
    Quote,
    /// Full-bleed image.
    Image,
}

/// One slide of the presentation.
///
/// `section_id` must name a declared [`Section`]; slides with a dangling
/// section reference are skipped by layout and navigation rather than
/// rejected here.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Unique slide identifier, e.g. `"slide-07"`.
    pub id: String,
    /// Identifier of the owning section.
    pub section_id: String,
    /// Visual treatment.
    pub kind: SlideKind,
    /// Slide title.
    pub title: String,
    /// Optional subtitle shown under the title.
    pub subtitle: Option<String>,
    /// Bulleted body content, in display order.
    pub bullets: Vec<String>,
    /// Quotation body for [`SlideKind::Quote`] slides.
    pub quote: Option<String>,
    /// Ladder position for level-based slides.
    pub level: Option<u8>,
    /// Background image URI.
    pub background_image: Option<String>,
}

impl Slide {
    /// Creates a slide with no optional content.
    pub fn new(
        id: impl Into<String>,
        section_id: impl Into<String>,
        kind: SlideKind,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            bullets: Vec::new(),
            quote: None,
            level: None,
            background_image: None,
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Replaces the bullet list.
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the quotation body.
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    /// Sets the ladder level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the background image URI.
    pub fn with_background_image(mut self, uri: impl Into<String>) -> Self {
        self.background_image = Some(uri.into());
        self
    }
}

/// Category of a linked resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// Long-form writing.
    Article,
    /// A product or utility.
    Tool,
    /// Video content.
    Video,
    /// Reference documentation.
    Docs,
    /// A source repository.
    Github,
    /// A reusable prompt; carries its text in [`Resource::prompt`].
    Prompt,
}

/// An external resource attached to a slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Identifier of the slide this resource belongs to.
    pub slide_id: String,
    /// Resource category.
    pub kind: ResourceKind,
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Thumbnail image URI.
    pub image: Option<String>,
    /// Short description shown in resource listings.
    pub description: Option<String>,
    /// Featured resources get a satellite icon on the map.
    pub featured: bool,
    /// Prompt text for [`ResourceKind::Prompt`] resources.
    pub prompt: Option<String>,
}

impl Resource {
    /// Creates a resource.
    pub fn new(
        id: impl Into<String>,
        slide_id: impl Into<String>,
        kind: ResourceKind,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slide_id: slide_id.into(),
            kind,
            title: title.into(),
            url: url.into(),
            image: None,
            description: None,
            featured: false,
            prompt: None,
        }
    }

    /// Sets the thumbnail image URI.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this resource as featured on the map.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Sets the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// A decorative landmark image placed on the map.
///
/// Landmarks take no part in navigation; they exist in the content model so
/// layout can place them and so their dragged position and scale can be
/// persisted alongside every other node.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    /// Unique landmark identifier, also used as its node id.
    pub id: String,
    /// Image URI; label-only landmarks leave this unset.
    pub image: Option<String>,
    /// Label shown while editing the map.
    pub label: String,
    /// Default render scale, where `1.0` is natural size.
    pub default_scale: Option<f64>,
}

impl Landmark {
    /// Creates a landmark.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: None,
            label: label.into(),
            default_scale: None,
        }
    }

    /// Sets the image URI.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Sets the default render scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.default_scale = Some(scale);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_builder_fills_optional_fields() {
        let slide = Slide::new("s1", "sec", SlideKind::Quote, "Avoidance")
            .with_quote("\"This won't affect my job.\"")
            .with_level(0)
            .with_bullets(["one", "two"]);

        assert_eq!(slide.level, Some(0));
        assert_eq!(slide.bullets.len(), 2);
        assert!(slide.quote.is_some());
        assert!(slide.subtitle.is_none());
    }

    #[test]
    fn resource_defaults_are_not_featured() {
        let resource = Resource::new(
            "r1",
            "s1",
            ResourceKind::Tool,
            "Tool",
            "https://example.com",
        );
        assert!(!resource.featured);
        assert!(resource.prompt.is_none());

        let featured = resource.clone().featured();
        assert!(featured.featured);
    }

    #[test]
    fn landmark_scale_defaults_to_none() {
        let landmark = Landmark::new("landmark-x", "X marks the spot");
        assert_eq!(landmark.default_scale, None);
        assert_eq!(landmark.with_scale(0.6).default_scale, Some(0.6));
    }
}
