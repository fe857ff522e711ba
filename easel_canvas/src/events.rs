// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the canvas.
//!
//! The canvas does not listen to any windowing system itself. Whatever hosts
//! it (a browser bridge, a native event loop, a test script) translates its
//! native events into [`InputEvent`] values and feeds them to
//! [`Canvas::handle_event`](crate::Canvas::handle_event). Positions are in
//! surface client pixels, exactly as delivered by the host; the canvas
//! normalizes them against the live surface bounds itself.
//!
//! ## Usage
//!
//! 1. Build one [`InputEvent`] per host event.
//! 2. For touch events, list every contact the host reports as changed in
//!    [`TouchEvent::changed`].
//! 3. Feed events in arrival order. Ordering is the host's contract; the
//!    canvas applies them strictly in sequence.
//!
//! ## Minimal example
//!
//! ```
//! use easel_canvas::events::{InputEvent, PointerButtons, PointerEvent};
//! use kurbo::Point;
//!
//! let event = InputEvent::PointerDown(PointerEvent {
//!     position: Point::new(400.0, 200.0),
//!     buttons: PointerButtons::PRIMARY,
//! });
//! assert!(matches!(event, InputEvent::PointerDown(_)));
//! ```

use kurbo::Point;
use smallvec::SmallVec;

pub use easel_event_state::pointer::PointerButtons;
pub use easel_event_state::touch::TouchId;

/// Changed contacts a [`TouchEvent`] can hold without allocating.
pub const INLINE_TOUCH_POINTS: usize = 4;

/// A mouse or pen event at a client-pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in surface client pixels.
    pub position: Point,
    /// Buttons held while the event fired.
    pub buttons: PointerButtons,
}

/// A wheel rotation event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical wheel delta. Positive values (wheel down) zoom out.
    pub delta_y: f64,
}

/// One touch contact within a [`TouchEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned identifier, stable for the lifetime of the contact.
    pub id: TouchId,
    /// Contact position in surface client pixels.
    pub position: Point,
}

/// A touch event carrying the contacts that changed.
///
/// Mirrors the `changedTouches` list of browser touch events: a start event
/// lists the new contacts, a move event the moved ones, an end event the
/// lifted ones. Contacts that did not change are not repeated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// The contacts that changed in this event.
    pub changed: SmallVec<[TouchPoint; INLINE_TOUCH_POINTS]>,
}

impl TouchEvent {
    /// Creates an event from the changed contacts.
    #[must_use]
    pub fn new(changed: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            changed: changed.into_iter().collect(),
        }
    }

    /// Creates an event for a single changed contact.
    #[must_use]
    pub fn single(id: TouchId, position: Point) -> Self {
        Self::new([TouchPoint { id, position }])
    }
}

/// An input event the canvas can apply.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown(PointerEvent),
    /// The pointer moved.
    PointerMove(PointerEvent),
    /// A pointer button was released.
    PointerUp(PointerEvent),
    /// The wheel rotated.
    Wheel(WheelEvent),
    /// New touch contacts appeared.
    TouchStart(TouchEvent),
    /// Existing touch contacts moved.
    TouchMove(TouchEvent),
    /// Touch contacts lifted.
    TouchEnd(TouchEvent),
    /// The surface was resized. The canvas re-reads its bounds on receipt.
    Resize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_event_collects_changed_contacts() {
        let event = TouchEvent::new([
            TouchPoint {
                id: TouchId(7),
                position: Point::new(1.0, 2.0),
            },
            TouchPoint {
                id: TouchId(9),
                position: Point::new(3.0, 4.0),
            },
        ]);

        assert_eq!(event.changed.len(), 2);
        assert_eq!(event.changed[0].id, TouchId(7));
        assert_eq!(event.changed[1].position, Point::new(3.0, 4.0));
    }

    #[test]
    fn single_contact_event_has_one_entry() {
        let event = TouchEvent::single(TouchId(3), Point::new(10.0, 20.0));

        assert_eq!(event.changed.len(), 1);
        assert_eq!(event.changed[0].id, TouchId(3));
        assert_eq!(event.changed[0].position, Point::new(10.0, 20.0));
    }

    #[test]
    fn default_touch_event_is_empty() {
        assert!(TouchEvent::default().changed.is_empty());
    }
}
