// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard vocabulary and its translation into controller operations.
//!
//! Event capture stays with the host; this module only maps already-decoded
//! keys to [`NavCommand`]s and applies them, so the controller never learns
//! about keyboards.

use crate::controller::NavController;

/// A decoded navigation key, as reported by the host's event layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Previous slide within the current section.
    ArrowUp,
    /// Next slide within the current section.
    ArrowDown,
    /// Track-aware previous slide.
    ArrowLeft,
    /// Track-aware next slide.
    ArrowRight,
    /// Previous section's first slide.
    PageUp,
    /// Next section's first slide.
    PageDown,
    /// A digit key, `0..=9`.
    Digit(u8),
    /// Overview toggle.
    Escape,
}

/// A controller operation selected by a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// Step forwards along the navigation graph.
    NextSlide,
    /// Step backwards along the navigation graph.
    PreviousSlide,
    /// Step to the next slide within the current section.
    NextInSection,
    /// Step to the previous slide within the current section.
    PreviousInSection,
    /// Jump to the next section's first slide.
    NextSection,
    /// Jump to the previous section's first slide.
    PreviousSection,
    /// Jump to the section at this index in deck order.
    JumpToSection(usize),
    /// Flip overview mode.
    ToggleOverview,
    /// Re-center the viewport on the current slide.
    FitCurrent,
}

impl NavCommand {
    /// Maps a key to its command.
    ///
    /// Digits `1..=9` address sections one-based; `0` refits the current
    /// slide. Digits past `9` have no binding.
    pub fn for_key(key: NavKey) -> Option<Self> {
        match key {
            NavKey::ArrowUp => Some(Self::PreviousInSection),
            NavKey::ArrowDown => Some(Self::NextInSection),
            NavKey::ArrowLeft => Some(Self::PreviousSlide),
            NavKey::ArrowRight => Some(Self::NextSlide),
            NavKey::PageUp => Some(Self::PreviousSection),
            NavKey::PageDown => Some(Self::NextSection),
            NavKey::Digit(0) => Some(Self::FitCurrent),
            NavKey::Digit(digit @ 1..=9) => Some(Self::JumpToSection(usize::from(digit) - 1)),
            NavKey::Digit(_) => None,
            NavKey::Escape => Some(Self::ToggleOverview),
        }
    }
}

impl NavController {
    /// Applies one command.
    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::NextSlide => self.go_to_next(),
            NavCommand::PreviousSlide => self.go_to_previous(),
            NavCommand::NextInSection => self.next_in_section(),
            NavCommand::PreviousInSection => self.previous_in_section(),
            NavCommand::NextSection => self.next_section(),
            NavCommand::PreviousSection => self.previous_section(),
            NavCommand::JumpToSection(index) => self.jump_to_section(index),
            NavCommand::ToggleOverview => self.toggle_overview(),
            NavCommand::FitCurrent => self.fit_current(),
        }
    }

    /// Translates and applies a key in one step.
    ///
    /// Returns whether the key had a binding; unbound keys leave all state
    /// untouched, letting the host pass them on.
    pub fn on_key(&mut self, key: NavKey) -> bool {
        match NavCommand::for_key(key) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use headway_content::{bundled_deck, bundled_topology};

    use super::*;

    #[test]
    fn digit_bindings() {
        assert_eq!(
            NavCommand::for_key(NavKey::Digit(0)),
            Some(NavCommand::FitCurrent)
        );
        assert_eq!(
            NavCommand::for_key(NavKey::Digit(1)),
            Some(NavCommand::JumpToSection(0))
        );
        assert_eq!(
            NavCommand::for_key(NavKey::Digit(9)),
            Some(NavCommand::JumpToSection(8))
        );
        assert_eq!(NavCommand::for_key(NavKey::Digit(10)), None);
    }

    #[test]
    fn keys_drive_the_controller() {
        let mut nav = NavController::new(&bundled_deck(), &bundled_topology());

        assert!(nav.on_key(NavKey::ArrowRight));
        assert_eq!(nav.current_slide(), Some("slide-02"));

        assert!(nav.on_key(NavKey::ArrowUp));
        assert_eq!(nav.current_slide(), Some("slide-01"));

        assert!(nav.on_key(NavKey::Digit(6)));
        assert_eq!(nav.current_slide(), Some("slide-26"));

        assert!(nav.on_key(NavKey::Escape));
        assert!(nav.is_overview());

        assert!(!nav.on_key(NavKey::Digit(12)));
        assert!(nav.is_overview());
    }
}
