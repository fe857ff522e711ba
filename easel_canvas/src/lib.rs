// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Canvas: a pannable, zoomable infinite canvas over an abstract
//! rendering surface.
//!
//! ## Position in the stack
//!
//! This crate ties the lower Easel layers together:
//!
//! - [`easel_view2d`] supplies the viewport math (offset, scale, view box).
//! - [`easel_event_state`] supplies gesture state (drag anchors, touch
//!   contacts).
//! - [`easel_surface`] supplies the document the canvas draws into.
//! - [`easel_scene`] supplies the items placed on the canvas.
//!
//! [`Canvas`] owns one of each concern and is the only type a host needs to
//! talk to: translate native input into [`events::InputEvent`] values, feed
//! them in, and the canvas keeps the surface's root view box in sync.
//!
//! ## Core concepts
//!
//! - **Mounting.** [`Canvas::mount`] looks up a mount point element by id,
//!   creates the root viewport element beneath it, and publishes the initial
//!   view box. A missing mount point is the only fatal error the canvas
//!   reports; after mounting, malformed or unapplicable events are dropped.
//! - **Normalized pointer space.** Event positions arrive in client pixels
//!   and are divided by the root's live bounding rectangle, so gestures are
//!   resolution independent and the canvas never needs to know where the
//!   surface sits on screen.
//! - **Anchor-relative panning.** A pan remembers the offset and pointer
//!   position at gesture start and recomputes from those anchors on every
//!   move, so long gestures accumulate no drift.
//!
//! ## Usage Patterns
//!
//! Mount on a headless surface, lay down a grid, and pan with a pointer
//! drag:
//!
//! ```
//! use easel_canvas::events::{InputEvent, PointerButtons, PointerEvent};
//! use easel_canvas::{Canvas, CanvasOptions};
//! use easel_scene::Grid;
//! use easel_surface::{PixelBounds, SvgSurface};
//! use kurbo::Point;
//!
//! let (surface, _mount) = SvgSurface::with_mount(
//!     PixelBounds::new(0.0, 0.0, 800.0, 400.0),
//!     "canvas",
//! );
//! let mut canvas = Canvas::mount(surface, "canvas", CanvasOptions::default())
//!     .expect("mount point exists");
//! canvas.set_background(&Grid::new(canvas.viewport().view_box().size().height, 25));
//!
//! canvas.run_events([
//!     InputEvent::PointerDown(PointerEvent {
//!         position: Point::new(400.0, 200.0),
//!         buttons: PointerButtons::PRIMARY,
//!     }),
//!     InputEvent::PointerMove(PointerEvent {
//!         position: Point::new(500.0, 200.0),
//!         buttons: PointerButtons::PRIMARY,
//!     }),
//! ]);
//!
//! assert_eq!(canvas.viewport().offset(), Point::new(-25.0, 0.0));
//! assert_eq!(
//!     canvas.surface().attribute(canvas.root(), "viewBox"),
//!     Some("-125 -50 200 100"),
//! );
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod canvas;
pub mod events;

pub use canvas::{Canvas, CanvasError, CanvasOptions};
