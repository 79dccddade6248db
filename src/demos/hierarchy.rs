//! Animated scene built from nested drawing procedures.
//!
//! Every shape is a function that saves the render state, places itself relative to its
//! caller, draws or calls further shapes, and restores. The call graph is the hierarchy.

use std::f64::consts::FRAC_PI_8;

use crate::{
    animation::clock::angle_degrees,
    foundation::core::{FrameIndex, Point, Rgba8, Viewport},
    foundation::error::HierResult,
    render::pipeline::{RenderOpts, record_frame},
    scene::node::RenderCx,
    scene::primitives,
    scene::surface::DrawCommand,
    transform::ops::TransformOp,
    view::mapper::ViewWindow,
};

/// Preferred display size.
pub const VIEWPORT: Viewport = Viewport {
    width: 800,
    height: 600,
};

/// Background fill.
pub const BACKGROUND: Rgba8 = Rgba8::WHITE;

/// World limits: x in `[-4, 4]`, y in `[-3, 3]` pointing up, axes scaled independently.
pub const WORLD: ViewWindow = ViewWindow {
    x_left: -4.0,
    x_right: 4.0,
    y_top: 3.0,
    y_bottom: -3.0,
    preserve_aspect: false,
};

/// Polygon spin per frame, in degrees; negative turns clockwise in the y-up world.
pub const SPIN_DEGREES_PER_FRAME: f64 = -2.0;

const POLYGON_SIDES: usize = 10;
const POLYGON_SCALE: f64 = 0.00475;
const POLYGON_STROKE: f64 = 2.0;
const BAR_LENGTH: f64 = 2.29;
const BAR_THICKNESS: f64 = 0.14;

/// Rotation of every spinning polygon at `frame`, in degrees.
pub fn polygon_angle_degrees(frame: FrameIndex) -> f64 {
    angle_degrees(frame, SPIN_DEGREES_PER_FRAME)
}

/// Spoked decagon of radius `r` (in polygon units) centered at world `(tx, ty)`, spinning with
/// the frame number.
pub fn rotating_polygon(cx: &mut RenderCx<'_>, r: f64, tx: f64, ty: f64) -> HierResult<()> {
    let points = primitives::snapped_ngon(POLYGON_SIDES, r, primitives::from_y_axis);

    let mut cx = cx.save();
    cx.set_stroke_width(POLYGON_STROKE);
    cx.translate(tx, ty);
    cx.set_color(Rgba8::BLACK);
    let angle = polygon_angle_degrees(cx.frame());
    cx.rotate(angle.to_radians());
    cx.compose(TransformOp::uniform_scale(POLYGON_SCALE));

    for p in &points {
        cx.stroke_line(*p, Point::ZERO)?;
    }
    cx.stroke_polygon(&points)
}

/// Slanted bar placed at `(tx, ty)` in its caller's frame.
pub fn slanted_bar(cx: &mut RenderCx<'_>, tx: f64, ty: f64) -> HierResult<()> {
    let mut cx = cx.save();
    cx.translate(tx, ty);
    cx.rotate(-FRAC_PI_8);
    cx.scale(BAR_LENGTH, BAR_THICKNESS);
    cx.fill(&primitives::unit_square())
}

/// A [`slanted_bar`] drawn inside a frame scaled by `(sx, sy)`, so the offset scales too.
pub fn scaled_bar(
    cx: &mut RenderCx<'_>,
    (sx, sy): (f64, f64),
    (tx, ty): (f64, f64),
    color: Rgba8,
) -> HierResult<()> {
    let mut cx = cx.save();
    cx.set_color(color);
    cx.scale(sx, sy);
    slanted_bar(&mut cx, tx, ty)
}

/// Filled triangle with apex at local `(0, 3)`, scaled by `(sx, sy)` and placed at `(tx, ty)`.
pub fn triangle(
    cx: &mut RenderCx<'_>,
    (sx, sy): (f64, f64),
    (tx, ty): (f64, f64),
    color: Rgba8,
) -> HierResult<()> {
    let mut cx = cx.save();
    cx.set_color(color);
    cx.translate(tx, ty);
    cx.scale(sx, sy);
    cx.fill_polygon(&[
        Point::new(0.0, 3.0),
        Point::new(1.0, 0.0),
        Point::new(-1.0, 0.0),
    ])
}

/// Draw the whole world. `cx` must already carry the [`WORLD`] mapping.
pub fn draw_world(cx: &mut RenderCx<'_>) -> HierResult<()> {
    tracing::trace!(frame = cx.frame().0, "drawing hierarchy world");

    for (r, tx, ty) in [
        (100.0, -1.02, -0.05),
        (100.0, 1.04, -0.9),
        (80.0, -1.3, 1.41),
        (80.0, -3.12, 2.22),
        (60.0, 0.85, 2.04),
        (60.0, 2.12, 1.44),
    ] {
        rotating_polygon(cx, r, tx, ty)?;
    }

    scaled_bar(cx, (1.0, 1.05), (0.0, -0.46), Rgba8::RED)?;
    scaled_bar(cx, (0.85, 0.95), (-2.6, 1.87), Rgba8::RED)?;
    scaled_bar(cx, (0.6, 0.7), (2.47, 2.47), Rgba8::RED)?;

    triangle(cx, (0.4, 0.5), (0.0, -2.0), Rgba8::BLUE)?;
    triangle(cx, (0.25, 0.35), (-2.25, 0.75), Rgba8::MAGENTA)?;
    triangle(cx, (0.15, 0.25), (1.5, 1.0), Rgba8::GREEN)
}

/// Recorded draw calls of the full frame `frame` at the default size, background included.
///
/// The list is a pure function of `frame`; replaying it reproduces the rendered frame.
pub fn scene_at(frame: FrameIndex) -> HierResult<Vec<DrawCommand>> {
    let scene = super::Scene::Hierarchy;
    record_frame(&scene, frame, &RenderOpts::for_scene(&scene))
}

#[cfg(test)]
#[path = "../../tests/unit/demos/hierarchy.rs"]
mod tests;
