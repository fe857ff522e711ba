// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas controller.
//!
//! [`Canvas`] owns a [`Surface`], a [`Viewport2D`], and the interaction state
//! needed to drive them from [`InputEvent`]s. It mounts a root viewport
//! element into the surface document, keeps the root's view box in sync with
//! the viewport after every change, and translates pointer, wheel, touch, and
//! resize events into pans and zooms.
//!
//! ## Usage
//!
//! 1. Create a [`Surface`] whose document contains the mount point element.
//! 2. Call [`Canvas::mount`] with the mount point's id and the initial
//!    [`CanvasOptions`].
//! 3. Populate the world with [`Canvas::set_background`] and
//!    [`Canvas::add_item`].
//! 4. Feed host input through [`Canvas::handle_event`] or
//!    [`Canvas::run_events`].
//!
//! ## Minimal example
//!
//! ```
//! use easel_canvas::events::{InputEvent, WheelEvent};
//! use easel_canvas::{Canvas, CanvasOptions};
//! use easel_surface::{PixelBounds, SvgSurface};
//!
//! let (surface, _) = SvgSurface::with_mount(
//!     PixelBounds::new(0.0, 0.0, 800.0, 400.0),
//!     "canvas",
//! );
//! let mut canvas = Canvas::mount(surface, "canvas", CanvasOptions::default())
//!     .expect("mount point exists");
//!
//! canvas.handle_event(InputEvent::Wheel(WheelEvent { delta_y: 10.0 }));
//! assert_eq!(canvas.viewport().scale(), 120.0);
//! ```

use alloc::string::String;

use hashbrown::HashMap;
use kurbo::Point;
use log::debug;
use thiserror::Error;

use easel_event_state::drag::DragState;
use easel_event_state::touch::{TouchId, TouchTracker};
use easel_scene::{SceneItem, TouchMarker};
use easel_surface::{ElementId, ElementKind, PixelBounds, Surface};
use easel_view2d::{DEFAULT_MIN_SCALE, Viewport2D};

use crate::events::{InputEvent, PointerButtons, PointerEvent, TouchEvent, WheelEvent};

/// Errors that can occur while mounting a [`Canvas`].
///
/// A missing mount point is the only fatal condition. Everything after a
/// successful mount is tolerant: events that cannot be applied are dropped
/// and surface operations on stale handles are no-ops.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// No element with the requested id exists in the surface document.
    #[error("mount point `{id}` not found in the surface document")]
    MountNotFound {
        /// The id that was searched for.
        id: String,
    },
}

/// Initial viewport configuration for [`Canvas::mount`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasOptions {
    /// Initial scale: world units spanned by the view's height.
    pub initial_scale: f64,
    /// Smallest scale zooming out of a wheel event may reach.
    pub min_scale: f64,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            initial_scale: 100.0,
            min_scale: DEFAULT_MIN_SCALE,
        }
    }
}

/// A pannable, zoomable infinite canvas mounted on a [`Surface`].
///
/// The canvas creates one viewport element under the mount point and treats
/// it as the root of the world: scene items are appended beneath it and the
/// viewport's view box is rewritten onto it after every pan, zoom, and
/// resize.
///
/// Event positions arrive in surface client pixels and are normalized
/// against the root's live bounding rectangle, so the canvas behaves the
/// same wherever the surface sits on screen. Events whose position cannot
/// be normalized (a degenerate zero-size rectangle) are dropped.
#[derive(Debug)]
pub struct Canvas<S: Surface> {
    surface: S,
    viewport: Viewport2D,
    drag: DragState,
    touches: TouchTracker,
    pan_touch: Option<TouchId>,
    markers: HashMap<TouchId, ElementId>,
    root: ElementId,
    background: Option<ElementId>,
}

impl<S: Surface> Canvas<S> {
    /// Mounts a canvas into `surface` under the element with id `mount_id`.
    ///
    /// Creates the root viewport element, appends it to the mount point,
    /// sizes the viewport from the root's bounding rectangle, and publishes
    /// the initial view box.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::MountNotFound`] if no element in the surface
    /// document carries `mount_id`.
    pub fn mount(
        mut surface: S,
        mount_id: &str,
        options: CanvasOptions,
    ) -> Result<Self, CanvasError> {
        let Some(mount_point) = surface.find_element(mount_id) else {
            return Err(CanvasError::MountNotFound {
                id: String::from(mount_id),
            });
        };

        let root = surface.create_element(ElementKind::Svg);
        surface.append_child(mount_point, root);

        let mut viewport = Viewport2D::new(options.initial_scale);
        viewport.set_min_scale(options.min_scale);
        viewport.set_surface_size(surface.bounding_rect(root).size());

        let mut canvas = Self {
            surface,
            viewport,
            drag: DragState::default(),
            touches: TouchTracker::new(),
            pan_touch: None,
            markers: HashMap::new(),
            root,
            background: None,
        };
        canvas.sync_view_box();
        debug!(
            "mounted on `{mount_id}` with view box {}",
            canvas.viewport.view_box()
        );
        Ok(canvas)
    }

    /// The viewport driving the root's view box.
    #[must_use]
    pub fn viewport(&self) -> &Viewport2D {
        &self.viewport
    }

    /// The surface the canvas draws to.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    ///
    /// Intended for hosts that need to reflect outside changes, such as a
    /// new bounding rectangle before a [`InputEvent::Resize`]. Structural
    /// edits under the root are the caller's responsibility.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The root viewport element the canvas created at mount.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The group element holding the current background, if one was set.
    #[must_use]
    pub fn background(&self) -> Option<ElementId> {
        self.background
    }

    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Number of touch contacts currently on the surface.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// The marker element tracking a touch contact, if the contact is live.
    #[must_use]
    pub fn marker_for(&self, touch: TouchId) -> Option<ElementId> {
        self.markers.get(&touch).copied()
    }

    /// Builds `item`, wraps its elements in a group under the root, and
    /// records the group as the canvas background.
    ///
    /// The previous background group, if any, is left in the document; only
    /// the recorded handle changes.
    pub fn set_background(&mut self, item: &impl SceneItem) -> ElementId {
        let group = self.wrap_in_group(item);
        self.background = Some(group);
        group
    }

    /// Builds `item` and appends its elements, wrapped in a group, under
    /// the root.
    pub fn add_item(&mut self, item: &impl SceneItem) -> ElementId {
        self.wrap_in_group(item)
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(pointer) => self.pointer_down(pointer),
            InputEvent::PointerMove(pointer) => self.pointer_move(pointer),
            InputEvent::PointerUp(pointer) => self.pointer_up(pointer),
            InputEvent::Wheel(wheel) => self.wheel(wheel),
            InputEvent::TouchStart(touch) => self.touch_start(&touch),
            InputEvent::TouchMove(touch) => self.touch_move(&touch),
            InputEvent::TouchEnd(touch) => self.touch_end(&touch),
            InputEvent::Resize => self.resize(),
        }
    }

    /// Applies a sequence of input events in order.
    pub fn run_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    fn pointer_down(&mut self, event: PointerEvent) {
        let Some(position) = self.normalize(event.position) else {
            return;
        };
        self.drag.start(position, self.viewport.offset());
        debug!("pointer down at {position:?}");
    }

    fn pointer_move(&mut self, event: PointerEvent) {
        if event.buttons != PointerButtons::PRIMARY {
            return;
        }
        let Some(position) = self.normalize(event.position) else {
            return;
        };
        self.pan_to(position);
    }

    fn pointer_up(&mut self, _event: PointerEvent) {
        self.drag.end();
        debug!("pointer up");
    }

    fn wheel(&mut self, event: WheelEvent) {
        self.viewport.zoom_by(event.delta_y);
        self.sync_view_box();
        debug!("wheel {} scale {}", event.delta_y, self.viewport.scale());
    }

    fn touch_start(&mut self, event: &TouchEvent) {
        let mut first_contact = None;
        for contact in &event.changed {
            let Some(position) = self.normalize(contact.position) else {
                continue;
            };
            if first_contact.is_none() {
                first_contact = Some((contact.id, position));
            }
            self.touches.start(contact.id, position);
            self.place_marker(contact.id, position);
        }

        // One contact drives the pan: the existing driver while it is still
        // down, otherwise the first contact from this event. The anchor is
        // recaptured on every start, so a landing finger never jumps the
        // view.
        let driver = self
            .pan_touch
            .and_then(|id| self.touches.position(id).map(|position| (id, position)))
            .or(first_contact);
        if let Some((id, position)) = driver {
            self.pan_touch = Some(id);
            self.drag.start(position, self.viewport.offset());
        }
        debug!("touch start, {} active", self.touches.len());
    }

    fn touch_move(&mut self, event: &TouchEvent) {
        for contact in &event.changed {
            let Some(position) = self.normalize(contact.position) else {
                continue;
            };
            if self.pan_touch == Some(contact.id) {
                self.pan_to(position);
            }
            if self.touches.update(contact.id, position)
                && let Some(&element) = self.markers.get(&contact.id)
            {
                let world = self.viewport.to_world(position);
                TouchMarker::move_to(&mut self.surface, element, world);
            }
        }
    }

    fn touch_end(&mut self, event: &TouchEvent) {
        for contact in &event.changed {
            self.touches.end(contact.id);
            if self.pan_touch == Some(contact.id) {
                self.pan_touch = None;
            }
            if let Some(element) = self.markers.remove(&contact.id) {
                self.surface.remove_child(self.root, element);
            }
        }
        self.drag.end();
        debug!("touch end, {} active", self.touches.len());
    }

    fn resize(&mut self) {
        let bounds = self.live_bounds();
        self.viewport.set_surface_size(bounds.size());
        self.sync_view_box();
        debug!("resized to {} x {}", bounds.width, bounds.height);
    }

    fn pan_to(&mut self, position: Point) {
        let (Some(anchor), Some(delta)) =
            (self.drag.start_offset, self.drag.total_offset(position))
        else {
            return;
        };
        self.viewport.pan_from_anchor(anchor, delta);
        self.sync_view_box();
        debug!("pan {delta:?}");
    }

    fn place_marker(&mut self, touch: TouchId, position: Point) {
        let world = self.viewport.to_world(position);
        if let Some(&element) = self.markers.get(&touch) {
            // A contact restarted without ending; reuse its marker.
            TouchMarker::move_to(&mut self.surface, element, world);
            return;
        }
        let elements = TouchMarker::new(world).build(&mut self.surface);
        for element in &elements {
            self.surface.append_child(self.root, *element);
        }
        if let Some(&element) = elements.first() {
            self.markers.insert(touch, element);
        }
    }

    fn wrap_in_group(&mut self, item: &impl SceneItem) -> ElementId {
        let group = self.surface.create_element(ElementKind::Group);
        let elements = item.build(&mut self.surface);
        for element in &elements {
            self.surface.append_child(group, *element);
        }
        self.surface.append_child(self.root, group);
        group
    }

    fn sync_view_box(&mut self) {
        let view_box = self.viewport.view_box();
        self.surface.set_view_box(self.root, &view_box);
    }

    fn normalize(&self, position: Point) -> Option<Point> {
        self.live_bounds().to_normalized(position)
    }

    fn live_bounds(&self) -> PixelBounds {
        self.surface.bounding_rect(self.root)
    }
}
