// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};

/// The world-space rectangle currently visible through a viewport.
///
/// `x`/`y` are the minimum corner; `width`/`height` are the extents, all in
/// world units. A `ViewBox` is derived state ([`crate::Viewport2D`]
/// recomputes it from its offset, scale, and surface size) and is never
/// mutated independently.
///
/// The [`Display`](core::fmt::Display) form is the wire format a rendering
/// surface consumes as its `viewBox` attribute: the four numbers in default
/// formatting, separated by single spaces, with no trailing content.
///
/// ```rust
/// use easel_view2d::ViewBox;
///
/// let vb = ViewBox::new(-100.0, -50.0, 200.0, 100.0);
/// assert_eq!(vb.to_string(), "-100 -50 200 100");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// Minimum X of the visible rectangle, in world units.
    pub x: f64,
    /// Minimum Y of the visible rectangle, in world units.
    pub y: f64,
    /// Width of the visible rectangle, in world units.
    pub width: f64,
    /// Height of the visible rectangle, in world units.
    pub height: f64,
}

impl ViewBox {
    /// Creates a view box from its minimum corner and extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a view box of the given extents centered on `center`.
    #[must_use]
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the extents as a [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the same rectangle as a [`Rect`], for intersection tests and
    /// other geometry against world-space content.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use kurbo::Point;

    use super::ViewBox;

    #[test]
    fn centered_places_minimum_corner_half_extent_away() {
        let vb = ViewBox::centered(Point::new(10.0, -4.0), 8.0, 2.0);
        assert_eq!(vb, ViewBox::new(6.0, -5.0, 8.0, 2.0));
        assert_eq!(vb.center(), Point::new(10.0, -4.0));
    }

    #[test]
    fn display_is_space_separated_default_formatting() {
        assert_eq!(
            ViewBox::new(-100.0, -50.0, 200.0, 100.0).to_string(),
            "-100 -50 200 100"
        );
        // Fractional components keep their shortest round-trip form.
        assert_eq!(
            ViewBox::new(-0.5, -0.5, 1.0, 1.0).to_string(),
            "-0.5 -0.5 1 1"
        );
        assert_eq!(
            ViewBox::new(0.1, 0.25, 12.5, 6.25).to_string(),
            "0.1 0.25 12.5 6.25"
        );
    }

    #[test]
    fn to_rect_spans_origin_to_far_corner() {
        let rect = ViewBox::new(-1.0, 2.0, 4.0, 8.0).to_rect();
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (-1.0, 2.0, 3.0, 10.0));
    }
}
