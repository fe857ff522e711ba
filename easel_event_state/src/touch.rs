// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch registry: mirror the set of active touch points across start/move/end events.
//!
//! ## Usage
//!
//! 1) On a touch-start event, call [`TouchTracker::start`] for each new touch point.
//! 2) On a touch-move event, call [`TouchTracker::update`] for each changed touch point.
//! 3) On a touch-end or touch-cancel event, call [`TouchTracker::end`] for each lifted
//!    touch point.
//!
//! Identifiers come from the input source and are only meaningful while the touch is
//! active. The tracker is deliberately forgiving about source quirks: updates for
//! unknown identifiers report `false` and change nothing, and ending an unknown
//! identifier is a no-op, so duplicated or out-of-order end events cannot corrupt the
//! registry.

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Inline capacity for identifier snapshots; larger touch sets spill to the heap.
const INLINE_TOUCHES: usize = 4;

/// Identifier for one touch point, as assigned by the input source.
///
/// Identifiers stay stable for the lifetime of a touch and may be reused by
/// the source after the touch ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TouchId(pub i64);

/// Registry of active touch points keyed by identifier.
///
/// Stores the last reported position for each active touch. Positions are
/// whatever space the caller feeds in; `easel_canvas` stores normalized
/// surface coordinates and converts to world space when it needs to.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    touches: HashMap<TouchId, Point>,
}

impl TouchTracker {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a touch point at `pos`.
    ///
    /// Returns the previous position when the identifier was already active,
    /// which means the source reused it without reporting an end.
    pub fn start(&mut self, id: TouchId, pos: Point) -> Option<Point> {
        self.touches.insert(id, pos)
    }

    /// Moves an active touch point to `pos`.
    ///
    /// Returns `false` (and changes nothing) when the identifier is unknown.
    pub fn update(&mut self, id: TouchId, pos: Point) -> bool {
        match self.touches.get_mut(&id) {
            Some(entry) => {
                *entry = pos;
                true
            }
            None => false,
        }
    }

    /// Removes a touch point, returning its last reported position.
    ///
    /// Ending an unknown identifier returns `None` and is otherwise a no-op,
    /// so repeated end events for the same touch are harmless.
    pub fn end(&mut self, id: TouchId) -> Option<Point> {
        self.touches.remove(&id)
    }

    /// Returns the last reported position of an active touch.
    #[must_use]
    pub fn position(&self, id: TouchId) -> Option<Point> {
        self.touches.get(&id).copied()
    }

    /// Returns `true` when the identifier names an active touch.
    #[must_use]
    pub fn contains(&self, id: TouchId) -> bool {
        self.touches.contains_key(&id)
    }

    /// Number of active touch points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Returns `true` when no touches are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// Snapshot of the active identifiers in ascending order.
    ///
    /// Sorted so logs and tests see a deterministic ordering regardless of
    /// hash state.
    #[must_use]
    pub fn ids(&self) -> SmallVec<[TouchId; INLINE_TOUCHES]> {
        let mut ids: SmallVec<[TouchId; INLINE_TOUCHES]> = self.touches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Removes every active touch point.
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
