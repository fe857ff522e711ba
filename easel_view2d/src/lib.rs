// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View 2D: the viewport model behind an editor canvas.
//!
//! This crate provides a small, headless model of a pannable, zoomable view
//! over a world-space plane. The view is described by a world-space center
//! (`offset`) and a `scale` giving the world units spanned by the view
//! height; from those and the pixel size of the hosting surface it derives
//! the visible world rectangle, the [`ViewBox`]. It focuses on:
//! - Viewport state (pan + zoom) and the derived visible rectangle.
//! - Conversion from normalized pointer coordinates into world space.
//! - Anchor-relative panning that accumulates no per-frame rounding error.
//!
//! It does **not** own any scene, surface, or event source. Callers are
//! expected to:
//! - Feed surface pixel dimensions in via [`Viewport2D::set_surface_size`]
//!   whenever the surface is created or resized.
//! - Wire pointer/touch/wheel input into [`Viewport2D::pan_from_anchor`] and
//!   [`Viewport2D::zoom_by`] at a higher layer (see `easel_canvas`).
//! - Publish [`Viewport2D::view_box`] to whatever renders the scene; its
//!   [`core::fmt::Display`] form is the SVG `viewBox` attribute value.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use easel_view2d::Viewport2D;
//!
//! // A view spanning 100 world units vertically, hosted on an 800x400 surface.
//! let mut view = Viewport2D::new(100.0);
//! view.set_surface_size(Size::new(800.0, 400.0));
//!
//! let vb = view.view_box();
//! assert_eq!((vb.x, vb.y, vb.width, vb.height), (-100.0, -50.0, 200.0, 100.0));
//!
//! // The surface center maps to the world-space center of the view.
//! let world = view.to_world(Point::new(0.5, 0.5));
//! assert_eq!(world, view.offset());
//! ```
//!
//! ## Coordinate spaces
//!
//! Two spaces appear throughout:
//! - **Pointer space**: positions normalized to `[0, 1]` across the
//!   surface's pixel bounding box. Input layers produce these.
//! - **World space**: the coordinate system of the content being viewed,
//!   independent of surface pixel size.
//!
//! ## Design notes
//!
//! - The view box height always equals `scale`; the width follows the
//!   surface's pixel aspect ratio, so world content is never stretched.
//! - Panning is anchor-relative: a move event supplies the offset captured
//!   at gesture start plus the total pointer delta, and the viewport
//!   recomputes from that anchor rather than integrating per-frame deltas.
//! - Zooming is multiplicative in the wheel delta and clamped to a minimum
//!   scale so that no sequence of wheel events can collapse or invert the
//!   view.
//! - Rotation and fitting are intentionally out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod view_box;
mod viewport2d;

pub use view_box::ViewBox;
pub use viewport2d::{DEFAULT_MIN_SCALE, Viewport2D, Viewport2DDebugInfo};
