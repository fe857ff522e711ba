// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: anchored gestures that report total offsets from the press position.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the press position and
//!    whatever origin the drag manipulates (for a pan, the view center at press time).
//! 2) On each move event, call [`DragState::total_offset`] to get the offset from the press
//!    position, and apply it to the captured origin in [`DragState::start_offset`].
//! 3) End the drag operation with [`DragState::end`] to reset state.
//!
//! Deltas are measured from the press position on every move, never from the previous
//! move, so a gesture's final state depends only on where the pointer ends up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use easel_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (0.5, 0.5); the pan origin is at (0, 0)
//! drag.start(Point::new(0.5, 0.5), Point::ZERO);
//! assert!(drag.is_dragging());
//!
//! // Move to (0.625, 0.5) - total offset is (0.125, 0)
//! let total = drag.total_offset(Point::new(0.625, 0.5)).unwrap();
//! assert_eq!(total, Vec2::new(0.125, 0.0));
//!
//! // A later move measures from the same press position
//! let total = drag.total_offset(Point::new(0.375, 0.75)).unwrap();
//! assert_eq!(total, Vec2::new(-0.125, 0.25));
//! ```

use kurbo::{Point, Vec2};

/// Tracks an anchored drag gesture for move event processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position captured when the gesture began.
    pub start_pos: Option<Point>,
    /// Origin of whatever the drag manipulates, captured when the gesture began.
    pub start_offset: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag operation.
    ///
    /// `pos` is the pointer position at press time; `offset` is the origin the
    /// drag manipulates, captured so moves can recompute from it.
    pub fn start(&mut self, pos: Point, offset: Point) {
        self.start_pos = Some(pos);
        self.start_offset = Some(offset);
    }

    /// Get total offset from the press position.
    ///
    /// Returns `None` while no drag is active.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.start_offset = None;
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
