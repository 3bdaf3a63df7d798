// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-delta tracking for node drags.

use kurbo::{Point, Vec2};

/// Tracks which node is being dragged and the last pointer position,
/// turning a stream of pointer positions into movement deltas.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeDrag {
    node: Option<String>,
    last: Option<Point>,
}

impl NodeDrag {
    /// Starts dragging `node` from `pointer`.
    pub(crate) fn begin(&mut self, node: &str, pointer: Point) {
        self.node = Some(node.into());
        self.last = Some(pointer);
    }

    /// Advances the drag to `pointer`, returning the delta since the
    /// last update. `None` when no drag is active.
    pub(crate) fn update(&mut self, pointer: Point) -> Option<Vec2> {
        self.node.as_ref()?;
        let last = self.last.replace(pointer)?;
        Some(pointer - last)
    }

    /// The node being dragged, while a drag is active.
    pub(crate) fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Whether a drag is active.
    pub(crate) fn is_active(&self) -> bool {
        self.node.is_some()
    }

    /// Ends the drag and clears all state.
    pub(crate) fn end(&mut self) {
        self.node = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_between_updates() {
        let mut drag = NodeDrag::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);

        drag.begin("metro-slide-03", Point::new(10.0, 20.0));
        assert!(drag.is_active());
        assert_eq!(drag.node(), Some("metro-slide-03"));

        assert_eq!(
            drag.update(Point::new(15.0, 18.0)),
            Some(Vec2::new(5.0, -2.0))
        );
        assert_eq!(
            drag.update(Point::new(16.0, 18.0)),
            Some(Vec2::new(1.0, 0.0))
        );

        drag.end();
        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
    }
}
