// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square background grid.

use easel_surface::{ElementKind, Surface};

use crate::{ElementList, SceneItem};

/// A square grid of evenly spaced lines centered on the world origin.
///
/// The grid spans `[-extent / 2, extent / 2]` on both axes, divided into
/// `squares` equal steps. Sizing the extent to the view height at mount
/// time (the canonical wiring) makes the grid exactly fill the initial
/// view vertically.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    start: f64,
    stop: f64,
    squares: u32,
}

impl Grid {
    /// Creates a grid spanning `extent` world units with `squares`
    /// divisions per side.
    ///
    /// `squares` is clamped to at least 1.
    #[must_use]
    pub fn new(extent: f64, squares: u32) -> Self {
        Self {
            start: -(extent / 2.0),
            stop: extent / 2.0,
            squares: squares.max(1),
        }
    }

    /// World coordinate of the grid's low edge on both axes.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// World coordinate of the grid's high edge on both axes.
    #[must_use]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Number of squares per side.
    #[must_use]
    pub fn squares(&self) -> u32 {
        self.squares
    }
}

impl SceneItem for Grid {
    /// Emits one vertical then one horizontal line per grid step, fence-post
    /// inclusive: `squares + 1` of each.
    fn build(&self, surface: &mut dyn Surface) -> ElementList {
        let mut elements = ElementList::new();
        let spacing = (self.stop - self.start) / f64::from(self.squares);

        for n in 0..=self.squares {
            let p = self.start + f64::from(n) * spacing;

            let col = surface.create_element(ElementKind::Line);
            surface.set_attribute_num(col, "x1", p);
            surface.set_attribute_num(col, "x2", p);
            surface.set_attribute_num(col, "y1", self.start);
            surface.set_attribute_num(col, "y2", self.stop);

            let row = surface.create_element(ElementKind::Line);
            surface.set_attribute_num(row, "x1", self.start);
            surface.set_attribute_num(row, "x2", self.stop);
            surface.set_attribute_num(row, "y1", p);
            surface.set_attribute_num(row, "y2", p);

            elements.push(col);
            elements.push(row);
        }

        elements
    }
}

#[cfg(test)]
mod tests {
    use easel_surface::{PixelBounds, SvgSurface};

    use super::*;

    fn surface() -> SvgSurface {
        SvgSurface::new(PixelBounds::new(0.0, 0.0, 800.0, 400.0))
    }

    #[test]
    fn grid_spans_half_the_extent_each_way() {
        let grid = Grid::new(100.0, 25);
        assert_eq!(grid.start(), -50.0);
        assert_eq!(grid.stop(), 50.0);
        assert_eq!(grid.squares(), 25);
    }

    #[test]
    fn build_emits_a_column_and_row_per_step() {
        let mut surface = surface();
        let elements = Grid::new(100.0, 25).build(&mut surface);

        // 26 fence posts, one column and one row each.
        assert_eq!(elements.len(), 52);
        assert!(
            elements
                .iter()
                .all(|el| surface.kind(*el) == Some(ElementKind::Line))
        );
    }

    #[test]
    fn lines_carry_world_coordinates() {
        let mut surface = surface();
        let elements = Grid::new(100.0, 25).build(&mut surface);

        // First pair sits on the low edge.
        let col = elements[0];
        assert_eq!(surface.attribute(col, "x1"), Some("-50"));
        assert_eq!(surface.attribute(col, "x2"), Some("-50"));
        assert_eq!(surface.attribute(col, "y1"), Some("-50"));
        assert_eq!(surface.attribute(col, "y2"), Some("50"));

        let row = elements[1];
        assert_eq!(surface.attribute(row, "x1"), Some("-50"));
        assert_eq!(surface.attribute(row, "x2"), Some("50"));
        assert_eq!(surface.attribute(row, "y1"), Some("-50"));
        assert_eq!(surface.attribute(row, "y2"), Some("-50"));

        // Second pair steps in by one spacing (100 / 25 = 4).
        let col = elements[2];
        assert_eq!(surface.attribute(col, "x1"), Some("-46"));

        // Last pair sits on the high edge.
        let col = elements[elements.len() - 2];
        assert_eq!(surface.attribute(col, "x1"), Some("50"));
    }

    #[test]
    fn zero_squares_is_clamped() {
        let mut surface = surface();
        let grid = Grid::new(100.0, 0);

        assert_eq!(grid.squares(), 1);
        // One square still draws its surrounding fence posts.
        assert_eq!(grid.build(&mut surface).len(), 4);
    }
}
