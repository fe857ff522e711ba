// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor node rectangle.

use easel_surface::{ElementKind, Surface};
use kurbo::Point;

use crate::{ElementList, SceneItem};

/// A rounded editor node rectangle.
///
/// Nodes are a fixed 20 x 20 world units with a corner radius of 1. A
/// default node sits with its top-left corner on the world origin;
/// [`EditorNode::at`] places it elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditorNode {
    position: Option<Point>,
}

impl EditorNode {
    /// Creates a node at the world origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node with its top-left corner at `position`.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// The node's explicit position, when one was given.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

impl SceneItem for EditorNode {
    fn build(&self, surface: &mut dyn Surface) -> ElementList {
        let rect = surface.create_element_with(
            ElementKind::Rect,
            &[("width", "20"), ("height", "20"), ("rx", "1")],
        );
        if let Some(position) = self.position {
            surface.set_attribute_num(rect, "x", position.x);
            surface.set_attribute_num(rect, "y", position.y);
        }
        let mut elements = ElementList::new();
        elements.push(rect);
        elements
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use easel_surface::{PixelBounds, SvgSurface};

    use super::*;

    #[test]
    fn default_node_is_a_bare_rounded_rect() {
        let mut surface = SvgSurface::new(PixelBounds::new(0.0, 0.0, 800.0, 400.0));
        let elements = EditorNode::new().build(&mut surface);

        assert_eq!(elements.len(), 1);
        let rect = elements[0];
        assert_eq!(surface.kind(rect), Some(ElementKind::Rect));

        let attributes: Vec<(&str, &str)> = surface
            .attributes(rect)
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attributes,
            [("width", "20"), ("height", "20"), ("rx", "1")]
        );
    }

    #[test]
    fn positioned_node_gains_coordinates() {
        let mut surface = SvgSurface::new(PixelBounds::new(0.0, 0.0, 800.0, 400.0));
        let node = EditorNode::at(Point::new(-10.0, 4.5));
        let rect = node.build(&mut surface)[0];

        assert_eq!(surface.attribute(rect, "x"), Some("-10"));
        assert_eq!(surface.attribute(rect, "y"), Some("4.5"));
        assert_eq!(surface.attribute(rect, "width"), Some("20"));
    }
}
