// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::view_box::ViewBox;

/// Default lower bound for [`Viewport2D::scale`].
///
/// Wheel zoom is multiplicative, so without a floor a long enough run of
/// zoom-out events would drive the scale to zero or below and invert the
/// view. The viewport clamps to this value unless
/// [`Viewport2D::set_min_scale`] configures another floor.
pub const DEFAULT_MIN_SCALE: f64 = 1e-6;

/// Fraction of the current scale applied per unit of wheel delta.
const ZOOM_RATE: f64 = 0.02;

/// 2D viewport over a world-space plane.
///
/// `Viewport2D` tracks a world-space center (`offset`) and a vertical extent
/// (`scale`), and derives the visible world rectangle, the [`ViewBox`], from
/// them plus the pixel size of the hosting surface. It can be used to:
/// - Convert normalized pointer positions into world coordinates.
/// - Pan relative to a gesture anchor and zoom from wheel deltas.
/// - Publish the derived view box to a rendering surface.
///
/// The view box is recomputed inside every mutating call, so reads through
/// [`Viewport2D::view_box`] are always consistent with the current state.
#[derive(Clone, Debug)]
pub struct Viewport2D {
    offset: Point,
    scale: f64,
    min_scale: f64,
    surface: Size,
    view_box: ViewBox,
}

impl Viewport2D {
    /// Creates a viewport centered on the world origin.
    ///
    /// - `scale` is the world extent of the view height, clamped to
    ///   [`DEFAULT_MIN_SCALE`].
    /// - Until a surface size arrives via [`Viewport2D::set_surface_size`],
    ///   the view box is a unit square centered on the offset.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        let offset = Point::ZERO;
        Self {
            offset,
            scale: scale.max(DEFAULT_MIN_SCALE),
            min_scale: DEFAULT_MIN_SCALE,
            surface: Size::ZERO,
            view_box: ViewBox::centered(offset, 1.0, 1.0),
        }
    }

    /// Returns the world-space center of the view.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the world extent of the view height.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the lower bound applied to the scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the last known surface pixel size.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Returns the visible world rectangle.
    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Sets the world-space center of the view.
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
        self.recompute();
    }

    /// Sets the scale, clamping it to the configured minimum.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.max(self.min_scale);
        self.recompute();
    }

    /// Sets the minimum scale and re-clamps the current scale against it.
    ///
    /// The floor itself is kept strictly positive.
    pub fn set_min_scale(&mut self, min_scale: f64) {
        self.min_scale = min_scale.max(f64::MIN_POSITIVE);
        self.set_scale(self.scale);
    }

    /// Records a new surface pixel size and recomputes the view box.
    ///
    /// Call this at mount time and whenever the hosting surface is resized.
    /// A size with non-positive height leaves the previous view box in
    /// place: a hidden or not-yet-laid-out surface has no aspect ratio to
    /// derive a rectangle from, and publishing one would divide by zero.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface = size;
        self.recompute();
    }

    /// Pans so the view sits `delta` away from where it was at gesture start.
    ///
    /// `anchor` is the offset captured when the gesture began and `delta` is
    /// the total pointer movement since then, in pointer space (fractions of
    /// the surface extent). Dragging the pointer right moves the view box
    /// left, so the content follows the pointer:
    ///
    /// `offset = anchor - (delta.x * width, delta.y * height)`
    ///
    /// Because each call starts from the same anchor, a gesture's
    /// intermediate moves accumulate no floating-point drift: any sequence
    /// of moves lands exactly where a single move to the final position
    /// would.
    pub fn pan_from_anchor(&mut self, anchor: Point, delta: Vec2) {
        let size = self.view_box.size();
        self.offset = Point::new(
            anchor.x - delta.x * size.width,
            anchor.y - delta.y * size.height,
        );
        self.recompute();
    }

    /// Zooms by a wheel delta.
    ///
    /// The scale changes by `delta * scale * 0.02`, so equal wheel motion
    /// feels equal at every zoom level. Positive deltas (wheel down) zoom
    /// out, negative deltas zoom in. The result is clamped to the minimum
    /// scale.
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = (self.scale + delta * self.scale * ZOOM_RATE).max(self.min_scale);
        self.recompute();
    }

    /// Maps a normalized pointer position into world coordinates.
    ///
    /// `(0, 0)` is the view box origin and `(1, 1)` its far corner; values
    /// outside `[0, 1]` extrapolate past the visible rectangle.
    #[must_use]
    pub fn to_world(&self, pointer: Point) -> Point {
        let origin = self.view_box.origin();
        Point::new(
            origin.x + pointer.x * self.view_box.width,
            origin.y + pointer.y * self.view_box.height,
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            offset: self.offset,
            scale: self.scale,
            min_scale: self.min_scale,
            surface_size: self.surface,
            view_box: self.view_box,
        }
    }

    fn recompute(&mut self) {
        if self.surface.height <= 0.0 {
            return;
        }
        let aspect_ratio = self.surface.width / self.surface.height;
        let height = self.scale;
        let width = aspect_ratio * height;
        self.view_box = ViewBox::centered(self.offset, width, height);
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// World-space center of the view.
    pub offset: Point,
    /// World extent of the view height.
    pub scale: f64,
    /// Lower bound applied to the scale.
    pub min_scale: f64,
    /// Last known surface pixel size.
    pub surface_size: Size,
    /// Visible world rectangle.
    pub view_box: ViewBox,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{DEFAULT_MIN_SCALE, ViewBox, Viewport2D};

    #[test]
    fn view_box_follows_surface_aspect_ratio() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(800.0, 400.0));

        let vb = vp.view_box();
        assert_eq!(vb, ViewBox::new(-100.0, -50.0, 200.0, 100.0));

        // Portrait surface: height still equals the scale.
        vp.set_surface_size(Size::new(200.0, 400.0));
        let vb = vp.view_box();
        assert_eq!(vb.height, 100.0);
        assert_eq!(vb.width, 50.0);
    }

    #[test]
    fn view_box_stays_centered_on_offset() {
        let mut vp = Viewport2D::new(40.0);
        vp.set_surface_size(Size::new(300.0, 300.0));
        vp.set_offset(Point::new(7.0, -3.0));

        let vb = vp.view_box();
        assert_eq!(vb.center(), Point::new(7.0, -3.0));
        assert_eq!(vb.x, 7.0 - 20.0);
        assert_eq!(vb.y, -3.0 - 20.0);
    }

    #[test]
    fn zero_height_surface_keeps_last_good_view_box() {
        let mut vp = Viewport2D::new(100.0);
        // Never laid out: the constructor's unit box survives.
        assert_eq!(vp.view_box(), ViewBox::new(-0.5, -0.5, 1.0, 1.0));

        vp.set_surface_size(Size::new(800.0, 400.0));
        let good = vp.view_box();

        vp.set_surface_size(Size::new(800.0, 0.0));
        assert_eq!(vp.view_box(), good);
    }

    #[test]
    fn wheel_delta_scales_multiplicatively() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(400.0, 400.0));

        vp.zoom_by(10.0);
        assert_eq!(vp.scale(), 120.0);

        vp.zoom_by(-10.0);
        assert_eq!(vp.scale(), 120.0 - 10.0 * 120.0 * 0.02);
    }

    #[test]
    fn zoom_never_collapses_scale() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(400.0, 400.0));

        // A single wheel event large enough to zero the naive formula.
        vp.zoom_by(-50.0);
        assert_eq!(vp.scale(), DEFAULT_MIN_SCALE);

        // And a long run of aggressive zoom-outs afterwards.
        for _ in 0..1000 {
            vp.zoom_by(-120.0);
        }
        assert!(vp.scale() >= DEFAULT_MIN_SCALE);
        assert!(vp.view_box().height > 0.0);
    }

    #[test]
    fn set_min_scale_reclamps_current_scale() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(400.0, 400.0));

        vp.set_min_scale(250.0);
        assert_eq!(vp.scale(), 250.0);

        // Lowering the floor does not move the scale back down.
        vp.set_min_scale(1.0);
        assert_eq!(vp.scale(), 250.0);
    }

    #[test]
    fn to_world_maps_unit_corners_to_view_box_corners() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(800.0, 400.0));
        vp.set_offset(Point::new(30.0, 10.0));

        let vb = vp.view_box();
        assert_eq!(vp.to_world(Point::ZERO), vb.origin());
        assert_eq!(
            vp.to_world(Point::new(1.0, 1.0)),
            Point::new(vb.x + vb.width, vb.y + vb.height)
        );
        assert_eq!(vp.to_world(Point::new(0.5, 0.5)), vb.center());
    }

    #[test]
    fn pan_from_anchor_is_not_cumulative() {
        let mut a = Viewport2D::new(100.0);
        a.set_surface_size(Size::new(800.0, 400.0));
        let mut b = a.clone();

        let anchor = a.offset();
        // Many intermediate moves...
        for i in 1..=10 {
            let t = f64::from(i) / 10.0;
            a.pan_from_anchor(anchor, Vec2::new(0.1 * t, -0.3 * t));
        }
        // ...equal one move to the final position.
        b.pan_from_anchor(anchor, Vec2::new(0.1, -0.3));

        assert_eq!(a.offset(), b.offset());
        assert_eq!(a.view_box(), b.view_box());
    }

    #[test]
    fn pan_moves_against_pointer_delta() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(800.0, 400.0));

        // Pointer dragged a tenth of the surface to the right.
        vp.pan_from_anchor(Point::ZERO, Vec2::new(0.1, 0.0));
        assert_eq!(vp.offset(), Point::new(-20.0, 0.0));
    }

    #[test]
    fn debug_info_reflects_current_state() {
        let mut vp = Viewport2D::new(100.0);
        vp.set_surface_size(Size::new(640.0, 480.0));
        vp.zoom_by(10.0);

        let info = vp.debug_info();
        assert_eq!(info.scale, 120.0);
        assert_eq!(info.surface_size, Size::new(640.0, 480.0));
        assert_eq!(info.view_box, vp.view_box());
        assert_eq!(info.min_scale, DEFAULT_MIN_SCALE);
    }
}
