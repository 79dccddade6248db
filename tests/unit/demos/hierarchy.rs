use super::*;
use crate::{
    foundation::core::{Affine, BezPath},
    scene::surface::{DrawKind, RecordingSurface},
    view::mapper::map_window,
};

fn record(frame: FrameIndex) -> Vec<crate::scene::surface::DrawCommand> {
    let mapping = map_window(&WORLD, VIEWPORT).unwrap();
    let mut surf = RecordingSurface::new(VIEWPORT);
    let mut cx = RenderCx::with_mapping(&mut surf, &mapping, frame);
    draw_world(&mut cx).unwrap();
    assert_eq!(cx.finish().unwrap(), mapping.transform);
    surf.into_commands()
}

#[test]
fn frame_45_spins_polygons_by_minus_90_degrees() {
    assert_eq!(polygon_angle_degrees(FrameIndex(45)), -90.0);

    let mapping = map_window(&WORLD, VIEWPORT).unwrap();
    let cmds = record(FrameIndex(45));
    let expected = mapping.transform
        * Affine::translate((-1.02, -0.05))
        * Affine::rotate((-90f64).to_radians())
        * Affine::scale(0.00475);
    assert_eq!(cmds[0].affine(), expected);

    // The local rotation is a quarter turn: local +x maps to world -y.
    let local = Affine::rotate((-90f64).to_radians());
    let [a, b, c, d, _, _] = local.as_coeffs();
    assert!(a.abs() < 1e-12 && (b + 1.0).abs() < 1e-12);
    assert!((c - 1.0).abs() < 1e-12 && d.abs() < 1e-12);
}

#[test]
fn same_frame_replays_bit_identically() {
    let a = record(FrameIndex(123));
    let b = record(FrameIndex(123));
    assert_eq!(a, b);
    assert_ne!(a, record(FrameIndex(124)));
}

#[test]
fn world_draw_order_and_counts() {
    let cmds = record(FrameIndex(0));
    // Six polygons of ten spokes plus an outline, three bars, three triangles.
    assert_eq!(cmds.len(), 6 * 11 + 3 + 3);

    let (polys, rest) = cmds.split_at(66);
    assert!(polys.iter().all(|c| c.kind == DrawKind::Stroke { width: 2.0 }));
    assert!(polys.iter().all(|c| c.color == Rgba8::BLACK));

    let colors: Vec<_> = rest.iter().map(|c| c.color).collect();
    assert_eq!(
        colors,
        vec![
            Rgba8::RED,
            Rgba8::RED,
            Rgba8::RED,
            Rgba8::BLUE,
            Rgba8::MAGENTA,
            Rgba8::GREEN
        ]
    );
    assert!(rest.iter().all(|c| c.kind == DrawKind::Fill));
}

#[test]
fn bar_offset_is_scaled_by_its_parent() {
    let mapping = map_window(&WORLD, VIEWPORT).unwrap();
    let cmds = record(FrameIndex(0));
    let bar = &cmds[66 + 1];
    let expected = mapping.transform
        * Affine::scale_non_uniform(0.85, 0.95)
        * Affine::translate((-2.6, 1.87))
        * Affine::rotate(-FRAC_PI_8)
        * Affine::scale_non_uniform(BAR_LENGTH, BAR_THICKNESS);
    assert_eq!(bar.affine(), expected);
}

#[test]
fn triangle_uses_local_apex_geometry() {
    let cmds = record(FrameIndex(0));
    let tri = &cmds[cmds.len() - 3];
    let path = BezPath::from_svg(&tri.path).unwrap();
    // move, two lines, close
    assert_eq!(path.elements().len(), 4);
    let mapping = map_window(&WORLD, VIEWPORT).unwrap();
    let apex = tri.affine() * Point::new(0.0, 3.0);
    let expected = mapping.world_to_pixel(Point::new(0.0, -2.0 + 1.5));
    assert!((apex.x - expected.x).abs() < 1e-9);
    assert!((apex.y - expected.y).abs() < 1e-9);
}

#[test]
fn scene_at_is_the_cleared_world_for_that_frame() {
    let cmds = scene_at(FrameIndex(45)).unwrap();
    assert_eq!(cmds[0].kind, DrawKind::Clear);
    assert_eq!(cmds[0].color, BACKGROUND);
    assert_eq!(&cmds[1..], record(FrameIndex(45)).as_slice());

    assert_eq!(scene_at(FrameIndex(45)).unwrap(), cmds);
    assert_ne!(scene_at(FrameIndex(46)).unwrap(), cmds);
}

#[test]
fn replaying_scene_at_reproduces_the_recording() {
    let cmds = scene_at(FrameIndex(12)).unwrap();
    let mut surf = RecordingSurface::new(VIEWPORT);
    crate::scene::surface::replay_all(&cmds, &mut surf).unwrap();
    assert_eq!(surf.into_commands(), cmds);
}
