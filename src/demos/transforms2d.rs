//! Preset affine transforms applied to a decagon.

use crate::{
    foundation::core::{Affine, Point, Rgba8, Vec2, Viewport},
    foundation::error::{HierError, HierResult},
    scene::node::RenderCx,
    scene::primitives,
    transform::ops::{TransformOp, compose_all},
};

/// Display size of the demo.
pub const VIEWPORT: Viewport = Viewport {
    width: 600,
    height: 600,
};

/// Background fill.
pub const BACKGROUND: Rgba8 = Rgba8::YELLOW;

/// Number of selectable presets, including "None".
pub const PRESET_COUNT: usize = 10;

const POLYGON_SIDES: usize = 10;
const POLYGON_RADIUS: f64 = 150.0;
const OUTLINE_WIDTH: f64 = 10.0;

/// Anything that reports which preset is selected, such as a combo box.
pub trait SelectionSource {
    /// Selected preset, `0..PRESET_COUNT`.
    fn selected_index(&self) -> usize;
}

impl SelectionSource for usize {
    fn selected_index(&self) -> usize {
        *self
    }
}

/// Label shown for preset `index`.
pub fn preset_label(index: usize) -> HierResult<String> {
    check_index(index)?;
    Ok(match index {
        0 => "None".to_string(),
        n => format!("No. {n}"),
    })
}

/// Ops of preset `index`, composed after centering.
pub fn preset_ops(index: usize) -> HierResult<Vec<TransformOp>> {
    use TransformOp as T;

    check_index(index)?;
    let ops = match index {
        1 => vec![T::scale(0.25, 0.25)],
        2 => vec![T::rotate_degrees(45.0)],
        3 => vec![T::scale(-0.4, 0.9), T::rotate_degrees(180.0)],
        4 => vec![T::shear(0.4, 0.0)],
        5 => vec![T::scale(1.0, 0.4), T::translate(0.0, -600.0)],
        6 => vec![T::shear(0.0, -0.4), T::rotate_degrees(90.0)],
        7 => vec![T::scale(0.4, 0.9), T::rotate_degrees(180.0)],
        8 => vec![
            T::rotate_degrees(30.0),
            T::scale(1.0, 0.4),
            T::translate(0.0, 300.0),
        ],
        9 => vec![
            T::rotate_degrees(180.0),
            T::shear(0.0, 0.3),
            T::translate(-165.0, 0.0),
        ],
        _ => Vec::new(),
    };
    Ok(ops)
}

/// Transform that moves the origin to the viewport center.
pub fn centering(viewport: Viewport) -> Affine {
    Affine::translate(viewport.center().to_vec2())
}

/// Full transform the decagon is drawn under for preset `index`.
pub fn preset_transform(index: usize, viewport: Viewport) -> HierResult<Affine> {
    Ok(compose_all(centering(viewport), &preset_ops(index)?))
}

/// Decagon vertices, vertex 0 on the positive x axis.
pub fn polygon_points() -> Vec<Point> {
    primitives::snapped_ngon(POLYGON_SIDES, POLYGON_RADIUS, primitives::from_x_axis)
}

/// Draw the demo for the selection reported by `selection`.
///
/// The outline is stroked first and the fill painted over it, so only the outer half of the
/// outline stays visible.
pub fn draw(cx: &mut RenderCx<'_>, selection: &dyn SelectionSource) -> HierResult<()> {
    let index = selection.selected_index();
    let ops = preset_ops(index)?;
    tracing::debug!(index, ops = ops.len(), "drawing transform preset");

    let mut cx = cx.save();
    let center: Vec2 = cx.viewport().center().to_vec2();
    cx.translate(center.x, center.y);
    for op in ops {
        cx.compose(op);
    }

    let points = polygon_points();
    cx.set_color(Rgba8::BLACK);
    cx.set_stroke_width(OUTLINE_WIDTH);
    cx.stroke_polygon(&points)?;
    cx.set_color(Rgba8::THISTLE);
    cx.fill_polygon(&points)
}

fn check_index(index: usize) -> HierResult<()> {
    if index >= PRESET_COUNT {
        return Err(HierError::validation(format!(
            "transform preset index {index} out of range 0..{PRESET_COUNT}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/demos/transforms2d.rs"]
mod tests;
