// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation graph: per-slide `previous`/`next` links.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use headway_content::{Anchor, Deck, SectionLink, Slide, Topology};

/// Traversal endpoints for one slide.
///
/// Either side is `None` at a dead end: the first slide of the first
/// section, the last slide of a terminal section, or any slide of a
/// section the topology never reaches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// Slide reached by stepping backwards, if any.
    pub previous: Option<String>,
    /// Slide reached by stepping forwards, if any.
    pub next: Option<String>,
}

/// Per-slide traversal links derived from a deck and its topology.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    links: HashMap<String, NavLinks>,
}

impl NavGraph {
    /// Builds the graph.
    ///
    /// Within a section, consecutive slides link to each other. At section
    /// boundaries the topology's link roles take over: `next` off a
    /// section's last slide follows the first advancing link out, and
    /// `previous` from a section's first slide returns along the first
    /// incoming link that supplies it, landing on the link's anchor slide.
    /// The winning link is chosen by declaration order alone; if its far
    /// side is an empty section, the endpoint is a dead end, not a
    /// fallthrough to the next candidate.
    pub fn build(deck: &Deck, topology: &Topology) -> Self {
        let mut links = HashMap::new();
        for section in deck.sections() {
            let slides: Vec<&Slide> = deck.slides_in(&section.id).collect();
            for (index, slide) in slides.iter().enumerate() {
                let previous = if index > 0 {
                    Some(slides[index - 1].id.clone())
                } else {
                    previous_across(deck, topology, &section.id)
                };
                let next = if index + 1 < slides.len() {
                    Some(slides[index + 1].id.clone())
                } else {
                    next_across(deck, topology, &section.id)
                };
                links.insert(slide.id.clone(), NavLinks { previous, next });
            }
        }
        Self { links }
    }

    /// Both links for a slide, if the slide is known.
    pub fn links(&self, slide_id: &str) -> Option<&NavLinks> {
        self.links.get(slide_id)
    }

    /// The slide reached by stepping forwards from `slide_id`.
    pub fn next_of(&self, slide_id: &str) -> Option<&str> {
        self.links
            .get(slide_id)
            .and_then(|links| links.next.as_deref())
    }

    /// The slide reached by stepping backwards from `slide_id`.
    pub fn previous_of(&self, slide_id: &str) -> Option<&str> {
        self.links
            .get(slide_id)
            .and_then(|links| links.previous.as_deref())
    }

    /// Number of slides with an entry.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when no slide has an entry.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn previous_across(deck: &Deck, topology: &Topology, section: &str) -> Option<String> {
    topology
        .links_into(section)
        .find(|link| link.supplies_previous())
        .and_then(|link| anchor_slide(deck, link))
        .map(|slide| slide.id.clone())
}

fn next_across(deck: &Deck, topology: &Topology, section: &str) -> Option<String> {
    topology
        .links_from(section)
        .find(|link| link.advances())
        .and_then(|link| deck.first_slide_in(&link.target))
        .map(|slide| slide.id.clone())
}

fn anchor_slide<'a>(deck: &'a Deck, link: &SectionLink) -> Option<&'a Slide> {
    match link.source_anchor {
        Anchor::First => deck.first_slide_in(&link.source),
        Anchor::Last => deck.last_slide_in(&link.source),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use headway_content::{Section, SlideKind, Track};

    use super::*;

    fn slide(id: &str, section: &str) -> Slide {
        Slide::new(id, section, SlideKind::Content, id)
    }

    fn two_section_deck() -> Deck {
        Deck::new(
            vec![
                Section::new("a", "A", Track::General),
                Section::new("b", "B", Track::General),
            ],
            vec![slide("a1", "a"), slide("a2", "a"), slide("b1", "b")],
            vec![],
            vec![],
        )
    }

    #[test]
    fn linear_chain_links_both_ways() {
        let deck = two_section_deck();
        let topology = Topology::new(vec![SectionLink::main("a", "b")]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.next_of("a1"), Some("a2"));
        assert_eq!(graph.next_of("a2"), Some("b1"));
        assert_eq!(graph.previous_of("b1"), Some("a2"));
        assert_eq!(graph.previous_of("a1"), None);
        assert_eq!(graph.next_of("b1"), None);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn branch_supplies_previous_but_never_advances() {
        let deck = two_section_deck();
        let topology = Topology::new(vec![SectionLink::branch("a", "b")]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.next_of("a2"), None);
        assert_eq!(graph.previous_of("b1"), Some("a2"));
    }

    #[test]
    fn only_the_primary_merge_supplies_previous() {
        let deck = Deck::new(
            vec![
                Section::new("a", "A", Track::General),
                Section::new("b", "B", Track::General),
                Section::new("c", "C", Track::General),
            ],
            vec![slide("a1", "a"), slide("b1", "b"), slide("c1", "c")],
            vec![],
            vec![],
        );
        let topology = Topology::new(vec![
            SectionLink::merge("a", "c", false),
            SectionLink::merge("b", "c", true),
        ]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.next_of("a1"), Some("c1"));
        assert_eq!(graph.next_of("b1"), Some("c1"));
        assert_eq!(graph.previous_of("c1"), Some("b1"));
    }

    #[test]
    fn first_anchor_returns_to_the_source_sections_first_slide() {
        let deck = two_section_deck();
        let topology = Topology::new(vec![SectionLink::branch("a", "b").from_first()]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.previous_of("b1"), Some("a1"));
    }

    #[test]
    fn links_into_an_empty_section_are_dead_ends() {
        let deck = Deck::new(
            vec![
                Section::new("a", "A", Track::General),
                Section::new("empty", "Empty", Track::General),
                Section::new("b", "B", Track::General),
            ],
            vec![slide("a1", "a"), slide("b1", "b")],
            vec![],
            vec![],
        );
        // The empty section wins both boundaries by declaration order; the
        // later a -> b link is never consulted.
        let topology = Topology::new(vec![
            SectionLink::main("a", "empty"),
            SectionLink::main("empty", "b"),
            SectionLink::main("a", "b"),
        ]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.next_of("a1"), None);
        assert_eq!(graph.previous_of("b1"), None);
    }

    #[test]
    fn scenic_links_contribute_nothing() {
        let deck = two_section_deck();
        let topology = Topology::new(vec![SectionLink::scenic("a", "b")]);
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.next_of("a2"), None);
        assert_eq!(graph.previous_of("b1"), None);
    }

    #[test]
    fn all_links_reference_known_slides() {
        let deck = headway_content::bundled_deck();
        let topology = headway_content::bundled_topology();
        let graph = NavGraph::build(&deck, &topology);

        assert_eq!(graph.len(), deck.slide_count());
        for slide in deck.slides() {
            let links = graph.links(&slide.id).unwrap();
            for endpoint in [&links.previous, &links.next].into_iter().flatten() {
                assert!(deck.slide(endpoint).is_some(), "{endpoint} is not a slide");
            }
        }
    }
}
