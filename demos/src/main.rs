// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editor session on the headless SVG surface.
//!
//! Mounts a canvas, lays down the grid and a couple of nodes, then replays
//! a pan, zoom, touch, and resize sequence, printing the published view box
//! as it changes. The final document is printed as SVG markup.
//!
//! Run:
//! - `cargo run -p easel_demos`
//! - `RUST_LOG=debug cargo run -p easel_demos` to see the canvas event log

use easel_canvas::events::{
    InputEvent, PointerButtons, PointerEvent, TouchEvent, TouchId, WheelEvent,
};
use easel_canvas::{Canvas, CanvasOptions};
use easel_scene::{EditorNode, Grid};
use easel_surface::{PixelBounds, Surface, SvgSurface};
use kurbo::Point;

fn primary(x: f64, y: f64) -> PointerEvent {
    PointerEvent {
        position: Point::new(x, y),
        buttons: PointerButtons::PRIMARY,
    }
}

fn main() {
    env_logger::init();

    let (surface, _mount) =
        SvgSurface::with_mount(PixelBounds::new(0.0, 0.0, 800.0, 400.0), "canvas");
    let mut canvas = Canvas::mount(surface, "canvas", CanvasOptions::default())
        .expect("the surface was built with a `canvas` mount point");

    // A grid sized to the view height exactly fills the initial view
    // vertically.
    let extent = canvas.viewport().view_box().size().height;
    let background = canvas.set_background(&Grid::new(extent, 25));
    canvas
        .surface_mut()
        .set_attribute(background, "stroke", "gainsboro");
    canvas
        .surface_mut()
        .set_attribute(background, "stroke-width", "0.25");

    canvas.add_item(&EditorNode::new());
    canvas.add_item(&EditorNode::at(Point::new(30.0, -15.0)));

    println!("mounted:      viewBox {}", canvas.viewport().view_box());

    // Drag an eighth of the view to the right.
    canvas.run_events([
        InputEvent::PointerDown(primary(400.0, 200.0)),
        InputEvent::PointerMove(primary(450.0, 200.0)),
        InputEvent::PointerMove(primary(500.0, 200.0)),
        InputEvent::PointerUp(PointerEvent {
            position: Point::new(500.0, 200.0),
            buttons: PointerButtons::empty(),
        }),
    ]);
    println!("after drag:   viewBox {}", canvas.viewport().view_box());

    // Zoom out, then back in. The steps are multiplicative, so the round
    // trip does not land exactly on the starting scale.
    canvas.run_events([
        InputEvent::Wheel(WheelEvent { delta_y: 10.0 }),
        InputEvent::Wheel(WheelEvent { delta_y: -10.0 }),
    ]);
    println!("after wheel:  scale {}", canvas.viewport().scale());

    // Two fingers down, one slides, both lift.
    canvas.run_events([
        InputEvent::TouchStart(TouchEvent::single(TouchId(1), Point::new(300.0, 200.0))),
        InputEvent::TouchStart(TouchEvent::single(TouchId(2), Point::new(500.0, 200.0))),
        InputEvent::TouchMove(TouchEvent::single(TouchId(1), Point::new(350.0, 200.0))),
        InputEvent::TouchEnd(TouchEvent::single(TouchId(1), Point::new(350.0, 200.0))),
        InputEvent::TouchEnd(TouchEvent::single(TouchId(2), Point::new(500.0, 200.0))),
    ]);
    println!("after touch:  {} active contacts", canvas.active_touches());

    // The host shrank the surface.
    canvas
        .surface_mut()
        .set_bounds(PixelBounds::new(0.0, 0.0, 400.0, 400.0));
    canvas.handle_event(InputEvent::Resize);
    println!("after resize: viewBox {}", canvas.viewport().view_box());

    println!();
    println!("{}", canvas.surface().to_svg());
}
