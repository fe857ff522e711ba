// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch contact markers.

use easel_surface::{ElementId, ElementKind, Surface};
use kurbo::Point;

use crate::{ElementList, SceneItem};

/// Radius of a [`TouchMarker`] built with [`TouchMarker::new`], in world
/// units.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

/// A filled circle marking a touch contact in world space.
///
/// One marker is created per active contact and repositioned with
/// [`TouchMarker::move_to`] as the contact moves, so the circle tracks
/// the finger on the surface.
#[derive(Clone, Copy, Debug)]
pub struct TouchMarker {
    center: Point,
    radius: f64,
}

impl TouchMarker {
    /// Creates a marker at `center` with [`DEFAULT_MARKER_RADIUS`].
    #[must_use]
    pub fn new(center: Point) -> Self {
        Self::with_radius(center, DEFAULT_MARKER_RADIUS)
    }

    /// Creates a marker at `center` with an explicit radius.
    #[must_use]
    pub fn with_radius(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// World position of the marker's center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the marker in world units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Repositions a previously built marker element to `center`.
    pub fn move_to(surface: &mut dyn Surface, element: ElementId, center: Point) {
        surface.set_attribute_num(element, "cx", center.x);
        surface.set_attribute_num(element, "cy", center.y);
    }
}

impl SceneItem for TouchMarker {
    fn build(&self, surface: &mut dyn Surface) -> ElementList {
        let circle = surface.create_element(ElementKind::Circle);
        surface.set_attribute_num(circle, "cx", self.center.x);
        surface.set_attribute_num(circle, "cy", self.center.y);
        surface.set_attribute_num(circle, "r", self.radius);

        let mut elements = ElementList::new();
        elements.push(circle);
        elements
    }
}
