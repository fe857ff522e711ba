// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Surface: the rendering-surface abstraction behind the Easel canvas.
//!
//! This crate defines the small element-tree interface the canvas layer
//! renders through, plus a headless in-memory implementation. It sits
//! between the interaction/viewport layers and whatever actually displays
//! elements (a browser DOM, a native scene graph, or nothing at all in
//! tests).
//!
//! # Position in the stack
//!
//! - **Viewport and interaction**: `easel_view2d` and `easel_canvas` decide
//!   what the view looks like and how input changes it. They talk to the
//!   surface only through the [`Surface`] trait.
//! - **Surface (this crate)**: visual elements expressed as opaque handles
//!   ([`ElementId`]) with string attributes and parent/child structure, in
//!   the shape of the SVG vocabulary ([`ElementKind`]).
//! - **Hosts**: concrete surfaces. [`SvgSurface`] is the built-in headless
//!   host; an embedder backed by a real DOM implements the same trait.
//!
//! # Core concepts
//!
//! - **Elements**: created by kind, configured by attribute, arranged by
//!   `append_child`/`remove_child`. Handles stay valid for the life of the
//!   surface.
//! - **Pixel bounds**: [`PixelBounds`] reports where the surface sits on the
//!   host in pixels; input layers use it to normalize client coordinates.
//! - **View box**: [`Surface::set_view_box`] publishes a world-space
//!   [`ViewBox`] to an element in the standard space-separated attribute
//!   format.
//!
//! Surfaces are deliberately tolerant: operations on handles a surface does
//! not know, or removals of children that are not attached, are no-ops. The
//! only failure a caller has to handle is failing to find a mount element,
//! and that is reported by [`Surface::find_element`] returning `None`.
//!
//! # Example
//!
//! ```rust
//! use easel_surface::{ElementKind, PixelBounds, Surface, SvgSurface};
//! use easel_view2d::ViewBox;
//!
//! let bounds = PixelBounds::new(0.0, 0.0, 800.0, 400.0);
//! let (mut surface, mount) = SvgSurface::with_mount(bounds, "canvas");
//!
//! // The mount is findable the way a DOM id lookup would find it.
//! assert_eq!(surface.find_element("canvas"), Some(mount));
//!
//! // Build a tiny document: an <svg> viewport with one <rect> inside.
//! let root = surface.create_element(ElementKind::Svg);
//! surface.append_child(mount, root);
//! let rect = surface.create_element_with(
//!     ElementKind::Rect,
//!     &[("width", "20"), ("height", "20"), ("rx", "1")],
//! );
//! surface.append_child(root, rect);
//!
//! surface.set_view_box(root, &ViewBox::new(-100.0, -50.0, 200.0, 100.0));
//! assert!(surface.to_svg().contains("viewBox=\"-100 -50 200 100\""));
//! ```

#![no_std]

extern crate alloc;

use alloc::format;

use easel_view2d::ViewBox;
use kurbo::{Point, Size};

mod svg;

pub use svg::SvgSurface;

/// Identifier for a visual element owned by a surface.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// surface. Detaching an element from its parent does not invalidate its
/// handle.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// The kinds of visual element this toolkit creates.
///
/// The vocabulary is the SVG subset the canvas layer needs; hosts that are
/// not SVG-based map each kind onto whatever primitive fits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The viewport element (`<svg>`); carries the published view box.
    Svg,
    /// Container grouping other elements (`<g>`).
    Group,
    /// Straight line segment (`<line>`).
    Line,
    /// Axis-aligned rectangle (`<rect>`).
    Rect,
    /// Circle (`<circle>`).
    Circle,
}

impl ElementKind {
    /// The SVG tag name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Circle => "circle",
        }
    }
}

/// Pixel-space placement of the surface on its host.
///
/// The same shape a DOM bounding client rect reports: `left`/`top` locate
/// the surface in the host's client coordinates, `width`/`height` give its
/// extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PixelBounds {
    /// Client X of the left edge.
    pub left: f64,
    /// Client Y of the top edge.
    pub top: f64,
    /// Extent along X, in pixels.
    pub width: f64,
    /// Extent along Y, in pixels.
    pub height: f64,
}

impl PixelBounds {
    /// Creates bounds from edge position and extent.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates bounds of the given size placed at the client origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// The pixel extent.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Maps a client-pixel position into normalized surface coordinates.
    ///
    /// `(0, 0)` is the surface's top-left corner and `(1, 1)` its bottom
    /// right. Returns `None` when the bounds are degenerate (zero or
    /// negative extent), since no meaningful mapping exists for a surface
    /// that is not laid out.
    #[must_use]
    pub fn to_normalized(&self, client: Point) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Point::new(
            (client.x - self.left) / self.width,
            (client.y - self.top) / self.height,
        ))
    }
}

/// Interface between the canvas layer and a host's element tree.
///
/// Implementations own element storage and layout knowledge. Handles must
/// stay valid and refer to the same logical element for the lifetime of the
/// surface. Operations addressing handles or attachments the surface does
/// not know are expected to be no-ops, not errors: input-driven callers
/// cannot usefully react to a failed attribute write.
pub trait Surface {
    /// Looks up an element by the host's id registry.
    ///
    /// This is how a canvas locates its mount point. `None` means the id
    /// names nothing; for mounting that is fatal to the caller.
    fn find_element(&self, dom_id: &str) -> Option<ElementId>;

    /// Creates a new, detached element of the given kind.
    fn create_element(&mut self, kind: ElementKind) -> ElementId;

    /// Sets an attribute, replacing any previous value under `name`.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Appends `child` as the last child of `parent`.
    ///
    /// An element has at most one parent: appending an already-attached
    /// element moves it. Appends that would make an element its own
    /// ancestor are ignored.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Detaches `child` from `parent`.
    ///
    /// Removing an element that is not currently a child of `parent` is a
    /// no-op.
    fn remove_child(&mut self, parent: ElementId, child: ElementId);

    /// Reports the pixel-space placement of an element on the host.
    fn bounding_rect(&self, element: ElementId) -> PixelBounds;

    /// Creates an element and sets an initial attribute list in one call.
    fn create_element_with(
        &mut self,
        kind: ElementKind,
        attributes: &[(&str, &str)],
    ) -> ElementId {
        let element = self.create_element(kind);
        for (name, value) in attributes {
            self.set_attribute(element, name, value);
        }
        element
    }

    /// Sets a numeric attribute using default `f64` formatting.
    fn set_attribute_num(&mut self, element: ElementId, name: &str, value: f64) {
        self.set_attribute(element, name, &format!("{value}"));
    }

    /// Publishes a view box to an element.
    ///
    /// The attribute value is the space-separated `viewBox` wire format
    /// produced by [`ViewBox`]'s `Display` implementation.
    fn set_view_box(&mut self, element: ElementId, view_box: &ViewBox) {
        self.set_attribute(element, "viewBox", &format!("{view_box}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_svg_tag_names() {
        assert_eq!(ElementKind::Svg.as_str(), "svg");
        assert_eq!(ElementKind::Group.as_str(), "g");
        assert_eq!(ElementKind::Line.as_str(), "line");
        assert_eq!(ElementKind::Rect.as_str(), "rect");
        assert_eq!(ElementKind::Circle.as_str(), "circle");
    }

    #[test]
    fn bounds_report_size_and_aspect() {
        let bounds = PixelBounds::new(10.0, 20.0, 800.0, 400.0);
        assert_eq!(bounds.size(), Size::new(800.0, 400.0));
        assert_eq!(bounds.aspect_ratio(), 2.0);
    }

    #[test]
    fn normalization_is_relative_to_the_bounds_origin() {
        let bounds = PixelBounds::new(100.0, 50.0, 800.0, 400.0);

        let norm = bounds.to_normalized(Point::new(100.0, 50.0));
        assert_eq!(norm, Some(Point::ZERO));

        let norm = bounds.to_normalized(Point::new(900.0, 450.0));
        assert_eq!(norm, Some(Point::new(1.0, 1.0)));

        let norm = bounds.to_normalized(Point::new(500.0, 250.0));
        assert_eq!(norm, Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn degenerate_bounds_do_not_normalize() {
        let flat = PixelBounds::new(0.0, 0.0, 800.0, 0.0);
        assert_eq!(flat.to_normalized(Point::new(400.0, 0.0)), None);

        let thin = PixelBounds::new(0.0, 0.0, 0.0, 400.0);
        assert_eq!(thin.to_normalized(Point::new(0.0, 200.0)), None);
    }
}
