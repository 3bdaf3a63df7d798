// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map's fixed geometry and palette.
//!
//! Everything here is a lookup, not a computation: per-section anchor
//! coordinates, line colors and labels, landmark placements, and the river
//! course. Unknown section ids fall back to defaults instead of failing,
//! so a deck can gain a section before this table learns about it.

use kurbo::Point;
use peniko::Color;

use headway_content::Track;

/// Horizontal distance between consecutive stops on a line.
pub const STOP_SPACING: f64 = 280.0;

/// Stroke width of metro line segments and connectors.
pub const LINE_THICKNESS: f64 = 16.0;

/// Corner radius for the stepped bends of metro edges.
pub const EDGE_BORDER_RADIUS: f64 = 20.0;

/// Extra step-out applied to level connectors so they route around the
/// line labels sitting above each section's first stop.
pub const CONNECTOR_OFFSET: f64 = 80.0;

/// Step-out for drop connectors between vertically stacked lines.
pub const DROP_OFFSET: f64 = 40.0;

/// Color of a line whose section has no palette entry.
pub const FALLBACK_LINE_COLOR: Color = Color::from_rgb8(0x6b, 0x72, 0x80);

/// Stroke color of the thin stop-to-resource-icon links.
pub const RESOURCE_LINK_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);

/// Stroke width of the thin stop-to-resource-icon links.
pub const RESOURCE_LINK_WIDTH: f64 = 2.0;

/// River fill color. A muted blue, distinct from the blue line.
pub const RIVER_COLOR: Color = Color::from_rgb8(0x93, 0xc5, 0xfd);

/// Nominal river stroke width; renderers derive the translucent layers.
pub const RIVER_WIDTH: f64 = 150.0;

/// Default position for stops of a section missing from the anchor table.
pub const DEFAULT_SECTION_ANCHOR: Point = Point::new(100.0, 300.0);

/// Line color for a section.
pub fn line_color(section_id: &str) -> Color {
    match section_id {
        "intro" => Color::from_rgb8(0xdc, 0x26, 0x26),
        "understanding" => Color::from_rgb8(0xea, 0xb3, 0x08),
        "mapping" => Color::from_rgb8(0x22, 0xc5, 0x5e),
        "levels-nontech" => Color::from_rgb8(0x3b, 0x82, 0xf6),
        "levels-tech" => Color::from_rgb8(0xf9, 0x73, 0x16),
        "projects" => Color::from_rgb8(0xd9, 0x46, 0xef),
        "closing" => Color::from_rgb8(0xa8, 0x55, 0xf7),
        _ => FALLBACK_LINE_COLOR,
    }
}

/// Accent color for a track.
pub fn track_color(track: Track) -> Color {
    match track {
        Track::NonTechnical => Color::from_rgb8(0x10, 0xb9, 0x81),
        Track::Technical => Color::from_rgb8(0x3b, 0x82, 0xf6),
        Track::General => Color::from_rgb8(0x6b, 0x72, 0x80),
    }
}

/// Anchor position of a section's first stop.
///
/// The x positions stagger to create the map's diagonal flow; the y
/// positions stack the parallel tracks. Unknown sections land at
/// [`DEFAULT_SECTION_ANCHOR`].
pub fn section_anchor(section_id: &str) -> Point {
    match section_id {
        "intro" => Point::new(100.0, 150.0),
        "understanding" => Point::new(250.0, 350.0),
        "mapping" => Point::new(400.0, 600.0),
        "levels-nontech" => Point::new(700.0, 500.0),
        "levels-tech" => Point::new(700.0, 850.0),
        "projects" => Point::new(700.0, 1150.0),
        "closing" => Point::new(3200.0, 700.0),
        _ => DEFAULT_SECTION_ANCHOR,
    }
}

/// A section's line label text and placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineLabelSpec {
    /// The big line name, e.g. "RED LINE".
    pub line_name: &'static str,
    /// The descriptive subtitle under the name.
    pub subtitle: &'static str,
    /// Offset from the section's first stop.
    pub offset: (f64, f64),
}

/// Label spec for a section, if it has one.
pub fn line_label(section_id: &str) -> Option<LineLabelSpec> {
    let (line_name, subtitle) = match section_id {
        "intro" => ("RED LINE", "The Widening Gulf (Introduction)"),
        "understanding" => ("YELLOW LINE", "Understanding AI"),
        "mapping" => ("GREEN LINE", "Mapping the Journey"),
        "levels-nontech" => ("BLUE LINE", "Non-Technical Track (Levels 0-8)"),
        "levels-tech" => ("ORANGE LINE", "Technical Track (Levels 1-9)"),
        "projects" => ("MAGENTA LINE", "Projects"),
        "closing" => ("PURPLE LINE", "Closing"),
        _ => return None,
    };
    Some(LineLabelSpec {
        line_name,
        subtitle,
        offset: (-50.0, -80.0),
    })
}

/// Initial position of a landmark, if the map places it.
///
/// The three ports sit near the lines they serve as entry points; the
/// destination cities frame the map's corners.
pub fn landmark_anchor(landmark_id: &str) -> Option<Point> {
    match landmark_id {
        "landmark-doomtown" => Some(Point::new(100.0, 900.0)),
        "landmark-slop-factory" => Some(Point::new(1800.0, 100.0)),
        "landmark-empowerment" => Some(Point::new(3500.0, 500.0)),
        "landmark-port-no-fear" => Some(Point::new(650.0, 750.0)),
        "landmark-port-curiosity" => Some(Point::new(200.0, 250.0)),
        "landmark-port-necessity" => Some(Point::new(400.0, 500.0)),
        _ => None,
    }
}

/// Waypoints of the river course, upstream to downstream.
///
/// The river meanders under the trunk and between the tracks; its spans
/// render as wide translucent beziers between consecutive waypoints.
pub const RIVER_COURSE: [Point; 4] = [
    Point::new(-300.0, 950.0),
    Point::new(500.0, 1020.0),
    Point::new(1600.0, 980.0),
    Point::new(2800.0, 1060.0),
];

/// Label drawn along the river's middle span.
pub const RIVER_LABEL: &str = "The Hype River";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_section_has_distinct_geometry() {
        let ids = [
            "intro",
            "understanding",
            "mapping",
            "levels-nontech",
            "levels-tech",
            "projects",
            "closing",
        ];
        for (i, a) in ids.iter().enumerate() {
            assert_ne!(section_anchor(a), DEFAULT_SECTION_ANCHOR);
            assert_ne!(line_color(a), FALLBACK_LINE_COLOR);
            assert!(line_label(a).is_some());
            for b in &ids[i + 1..] {
                assert_ne!(section_anchor(a), section_anchor(b), "{a} and {b} overlap");
                assert_ne!(line_color(a), line_color(b), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn unknown_sections_fall_back() {
        assert_eq!(section_anchor("basement"), DEFAULT_SECTION_ANCHOR);
        assert_eq!(line_color("basement"), FALLBACK_LINE_COLOR);
        assert_eq!(line_label("basement"), None);
    }

    #[test]
    fn parallel_tracks_share_their_start_column() {
        assert_eq!(
            section_anchor("levels-nontech").x,
            section_anchor("levels-tech").x
        );
        assert_eq!(
            section_anchor("levels-tech").x,
            section_anchor("projects").x
        );
        assert!(section_anchor("levels-nontech").y < section_anchor("levels-tech").y);
        assert!(section_anchor("levels-tech").y < section_anchor("projects").y);
    }

    #[test]
    fn river_flows_left_to_right() {
        for pair in RIVER_COURSE.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }
}
