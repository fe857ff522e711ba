// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Event State: input gesture state for an editor canvas.
//!
//! This crate provides small, focused state managers for the interactions an
//! editor canvas has to track across multiple input events. Each module
//! handles one pattern:
//!
//! - [`pointer`]: Pressed-button bitmask shared by pointer events
//! - [`drag`]: Anchored drag gestures that report total offsets from a fixed
//!   starting point
//! - [`touch`]: A registry of active touch points keyed by source-assigned
//!   identifiers
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to interpret the next
//!   event
//! - **Source-agnostic**: Work with any event loop, windowing layer, or
//!   scripted test driver
//!
//! The crate does not assume any particular UI framework or event system. The
//! managers accept raw positions and button masks and leave policy (what a
//! drag pans, where a touch marker lands) to the caller. `easel_canvas`
//! composes them into a full interaction controller.
//!
//! ## Usage Patterns
//!
//! ### Anchored Drags
//!
//! Use [`drag::DragState`] to track a press-move-release gesture. Every move
//! reports the total offset from the press position, so consumers that apply
//! it to state captured at the press accumulate no per-move rounding error:
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use easel_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (0.25, 0.5) while the pan origin sits at (10, 10).
//! drag.start(Point::new(0.25, 0.5), Point::new(10.0, 10.0));
//!
//! // Each move measures from the press position, not the previous move.
//! let total = drag.total_offset(Point::new(0.375, 0.5)).unwrap();
//! assert_eq!(total, Vec2::new(0.125, 0.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```
//!
//! ### Touch Registries
//!
//! Use [`touch::TouchTracker`] to mirror the set of active touch points. Ends
//! are idempotent, so sources that report a touch's end more than once (or
//! never reported its start) stay harmless:
//!
//! ```rust
//! use kurbo::Point;
//! use easel_event_state::touch::{TouchId, TouchTracker};
//!
//! let mut touches = TouchTracker::new();
//!
//! touches.start(TouchId(7), Point::new(0.2, 0.2));
//! assert!(touches.update(TouchId(7), Point::new(0.3, 0.2)));
//!
//! assert_eq!(touches.end(TouchId(7)), Some(Point::new(0.3, 0.2)));
//! assert_eq!(touches.end(TouchId(7)), None);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

pub mod drag;
pub mod pointer;
pub mod touch;
