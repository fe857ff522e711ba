// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Scene: the stock scene items shown on an editor canvas.
//!
//! Scene items are deterministic shape builders: given a [`Surface`], each
//! creates its visual elements and hands the resulting handles back to the
//! caller, which decides where to attach them. The canvas layer wraps an
//! item's elements in a group and appends the group under its viewport.
//!
//! Three items cover the starter editor:
//!
//! - [`Grid`]: the square background grid
//! - [`EditorNode`]: a rounded node rectangle
//! - [`TouchMarker`]: a circle marking an active touch point
//!
//! ```rust
//! use easel_scene::{Grid, SceneItem};
//! use easel_surface::{PixelBounds, SvgSurface};
//!
//! let mut surface = SvgSurface::new(PixelBounds::new(0.0, 0.0, 800.0, 400.0));
//!
//! // A 100-unit grid with 25 squares per side: 26 columns and 26 rows.
//! let grid = Grid::new(100.0, 25);
//! let elements = grid.build(&mut surface);
//! assert_eq!(elements.len(), 52);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

use easel_surface::{ElementId, Surface};
use smallvec::SmallVec;

mod grid;
mod marker;
mod node;

pub use grid::Grid;
pub use marker::{DEFAULT_MARKER_RADIUS, TouchMarker};
pub use node::EditorNode;

/// Inline capacity for element lists; larger items spill to the heap.
pub const INLINE_ELEMENTS: usize = 8;

/// Elements created by one scene item, in paint order.
pub type ElementList = SmallVec<[ElementId; INLINE_ELEMENTS]>;

/// A deterministic builder of visual elements.
///
/// Implementations create their elements detached; attaching them (and
/// grouping, z-ordering, or removing them later) is the caller's business.
pub trait SceneItem {
    /// Creates this item's elements on `surface` and returns their handles.
    fn build(&self, surface: &mut dyn Surface) -> ElementList;
}
