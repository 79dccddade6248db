use super::*;
use crate::foundation::core::Point;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn shear_matches_row_major_definition() {
    let m = TransformOp::shear(0.4, 0.0).to_affine();
    assert!(close(m * Point::new(0.0, 10.0), Point::new(4.0, 10.0)));
    assert!(close(m * Point::new(10.0, 0.0), Point::new(10.0, 0.0)));

    let m = TransformOp::shear(0.0, -0.4).to_affine();
    assert!(close(m * Point::new(10.0, 0.0), Point::new(10.0, -4.0)));
}

#[test]
fn rotation_is_counter_clockwise_in_y_up_terms() {
    let m = TransformOp::rotate_degrees(90.0).to_affine();
    assert!(close(m * Point::new(1.0, 0.0), Point::new(0.0, 1.0)));
}

#[test]
fn compose_all_applies_ops_innermost_last() {
    // Scale first in the list means points are translated before being scaled.
    let ops = [TransformOp::scale(2.0, 2.0), TransformOp::translate(1.0, 0.0)];
    let m = compose_all(Affine::IDENTITY, &ops);
    assert!(close(m * Point::ZERO, Point::new(2.0, 0.0)));
}

#[test]
fn degenerate_ops_are_flagged() {
    assert!(TransformOp::scale(0.0, 1.0).is_degenerate());
    assert!(TransformOp::shear(1.0, 1.0).is_degenerate());
    assert!(!TransformOp::shear(0.4, 0.0).is_degenerate());
    assert!(!TransformOp::rotate(1.0).is_degenerate());
}

#[test]
fn ops_serialize_with_tag() {
    let json = serde_json::to_string(&TransformOp::translate(0.0, -600.0)).unwrap();
    assert_eq!(json, r#"{"op":"translate","dx":0.0,"dy":-600.0}"#);
    let back: TransformOp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TransformOp::translate(0.0, -600.0));
}

#[test]
fn uniform_scale_scales_both_axes() {
    assert_eq!(TransformOp::uniform_scale(3.0), TransformOp::scale(3.0, 3.0));
    assert_eq!(TransformOp::uniform_scale(0.5).to_affine(), Affine::scale(0.5));
}
