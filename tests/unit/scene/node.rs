use super::*;
use crate::{
    foundation::error::HierError,
    scene::surface::{DrawKind, RecordingSurface},
};

fn surface() -> RecordingSurface {
    RecordingSurface::new(Viewport::new(100, 100).unwrap())
}

fn red_square(cx: &mut RenderCx<'_>) -> HierResult<()> {
    let mut cx = cx.save();
    cx.set_color(Rgba8::RED);
    cx.translate(10.0, 0.0);
    cx.scale(4.0, 4.0);
    cx.fill(&primitives::unit_square())
}

fn plain_square(cx: &mut RenderCx<'_>) -> HierResult<()> {
    cx.fill(&primitives::unit_square())
}

#[test]
fn siblings_do_not_inherit_transform_or_color() {
    let mut surf = surface();
    let root = Affine::translate((50.0, 50.0));
    let mut cx = RenderCx::new(&mut surf, root, 1.0, FrameIndex(0));
    cx.set_color(Rgba8::BLUE);
    cx.draw(&red_square).unwrap();
    cx.draw(&plain_square).unwrap();
    assert_eq!(cx.finish().unwrap(), root);

    let cmds = surf.commands();
    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[0].color, Rgba8::RED);
    assert_eq!(
        cmds[0].affine(),
        root * Affine::translate((10.0, 0.0)) * Affine::scale(4.0)
    );
    assert_eq!(cmds[1].color, Rgba8::BLUE);
    assert_eq!(cmds[1].affine(), root);
}

#[test]
fn children_observe_accumulated_transform() {
    fn child(cx: &mut RenderCx<'_>) -> HierResult<()> {
        let mut cx = cx.save();
        cx.rotate(std::f64::consts::FRAC_PI_2);
        cx.fill(&primitives::unit_triangle())
    }
    fn parent(cx: &mut RenderCx<'_>) -> HierResult<()> {
        let mut cx = cx.save();
        cx.translate(3.0, 4.0);
        cx.draw(&child)?;
        cx.draw(&child)
    }

    let mut surf = surface();
    let mut cx = RenderCx::new(&mut surf, Affine::IDENTITY, 1.0, FrameIndex(0));
    cx.draw(&parent).unwrap();
    assert_eq!(cx.depth(), 0);
    cx.finish().unwrap();

    let expected = Affine::translate((3.0, 4.0)) * Affine::rotate(std::f64::consts::FRAC_PI_2);
    for cmd in surf.commands() {
        assert_eq!(cmd.affine(), expected);
    }
}

#[test]
fn state_is_restored_when_a_node_fails() {
    fn failing(cx: &mut RenderCx<'_>) -> HierResult<()> {
        let mut cx = cx.save();
        cx.set_color(Rgba8::GREEN);
        cx.set_stroke_width(9.0);
        cx.scale(0.0, 0.0);
        Err(HierError::render("backend gone"))
    }

    let mut surf = surface();
    let mut cx = RenderCx::new(&mut surf, Affine::scale(2.0), 1.0, FrameIndex(3));
    let before = cx.state();
    assert!(cx.draw(&failing).is_err());
    assert_eq!(cx.state(), before);
    assert_eq!(cx.transform(), Affine::scale(2.0));
    assert_eq!(cx.depth(), 0);
    assert_eq!(cx.frame(), FrameIndex(3));
}

#[test]
fn closures_are_scene_nodes() {
    let width = 2.5;
    let node = move |cx: &mut RenderCx<'_>| -> HierResult<()> {
        let mut cx = cx.save();
        cx.set_stroke_width(width);
        cx.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
    };

    let mut surf = surface();
    let mut cx = RenderCx::new(&mut surf, Affine::IDENTITY, 1.0, FrameIndex(0));
    cx.draw(&node).unwrap();
    assert_eq!(cx.stroke_width(), 1.0);
    cx.finish().unwrap();

    assert_eq!(surf.commands()[0].kind, DrawKind::Stroke { width: 2.5 });
    let path = BezPath::from_svg(&surf.commands()[0].path).unwrap();
    assert_eq!(path.elements().len(), 2);
}

#[test]
fn mapping_sets_one_pixel_default_stroke() {
    use crate::view::mapper::{ViewWindow, map_window};

    let mapping = map_window(
        &ViewWindow::new(-4.0, 4.0, 3.0, -3.0, false),
        Viewport::new(800, 600).unwrap(),
    )
    .unwrap();
    let mut surf = surface();
    let cx = RenderCx::with_mapping(&mut surf, &mapping, FrameIndex(0));
    assert_eq!(cx.stroke_width(), mapping.pixel_size);
    assert_eq!(cx.pixel_size(), mapping.pixel_size);
    assert_eq!(cx.transform(), mapping.transform);
}

#[test]
fn unbalanced_pass_is_reported_by_finish() {
    let mut surf = surface();
    let mut cx = RenderCx::new(&mut surf, Affine::IDENTITY, 1.0, FrameIndex(0));
    let guard = cx.save();
    std::mem::forget(guard);
    assert!(matches!(
        cx.finish(),
        Err(HierError::UnbalancedStack { depth: 1 })
    ));
}

#[test]
fn recorded_commands_serialize_flat() {
    let mut surf = surface();
    surf.clear(Rgba8::WHITE).unwrap();
    let json = serde_json::to_value(surf.commands()).unwrap();
    assert_eq!(json[0]["kind"], "clear");
    assert_eq!(json[0]["color"]["r"], 255);
}
