//! Unit shapes in local coordinates. Nodes scale and place them with the transform stack.

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect};

const CURVE_TOLERANCE: f64 = 1e-3;

/// Segment from `(-0.5, 0)` to `(0.5, 0)`.
pub fn unit_line() -> BezPath {
    segment(Point::new(-0.5, 0.0), Point::new(0.5, 0.0))
}

/// Square of side 1 centered at the origin.
pub fn unit_square() -> BezPath {
    Rect::new(-0.5, -0.5, 0.5, 0.5).to_path(CURVE_TOLERANCE)
}

/// Circle of diameter 1 centered at the origin.
pub fn unit_circle() -> BezPath {
    kurbo::Circle::new(Point::ZERO, 0.5).to_path(CURVE_TOLERANCE)
}

/// Triangle of width 1 and height 1 whose base is centered on the origin.
pub fn unit_triangle() -> BezPath {
    polygon(&[
        Point::new(-0.5, 0.0),
        Point::new(0.5, 0.0),
        Point::new(0.0, 1.0),
    ])
}

/// Open segment between two points.
pub fn segment(a: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(b);
    path
}

/// Closed polygon through `points`. Fewer than two points yields an empty path.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    if rest.is_empty() {
        return path;
    }
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Vertices of a regular `n`-gon of radius `r`, snapped toward zero onto the integer grid.
///
/// Vertex `k` sits at angle `k * TAU / n`, measured by `place`, which turns `(r, angle)` into a
/// point. The snapping keeps outlines identical to integer-coordinate polygon APIs.
pub fn snapped_ngon(n: usize, r: f64, place: impl Fn(f64, f64) -> Point) -> Vec<Point> {
    let step = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let p = place(r, k as f64 * step);
            Point::new(p.x.trunc(), p.y.trunc())
        })
        .collect()
}

/// `(r cos a, r sin a)`: vertex 0 on the positive x axis.
pub fn from_x_axis(r: f64, a: f64) -> Point {
    Point::new(r * a.cos(), r * a.sin())
}

/// `(r sin a, r cos a)`: vertex 0 on the positive y axis.
pub fn from_y_axis(r: f64, a: f64) -> Point {
    Point::new(r * a.sin(), r * a.cos())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitives.rs"]
mod tests;
