use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn vp(width: u32, height: u32) -> Viewport {
    Viewport::new(width, height).unwrap()
}

#[test]
fn matching_aspect_leaves_limits_unchanged() {
    let window = ViewWindow::new(-4.0, 4.0, 3.0, -3.0, true);
    let m = map_window(&window, vp(800, 600)).unwrap();
    assert_eq!(m.limits, window);
    assert!(approx(m.sx, 100.0));
    assert!(approx(m.sy, -100.0));
    assert!(approx(m.pixel_size, 0.01));
}

#[test]
fn root_transform_maps_corners_to_viewport_corners() {
    let window = ViewWindow::new(-4.0, 4.0, 3.0, -3.0, false);
    let m = map_window(&window, vp(800, 600)).unwrap();

    let tl = m.world_to_pixel(Point::new(-4.0, 3.0));
    let br = m.world_to_pixel(Point::new(4.0, -3.0));
    let origin = m.world_to_pixel(Point::ZERO);
    assert!(approx(tl.x, 0.0) && approx(tl.y, 0.0));
    assert!(approx(br.x, 800.0) && approx(br.y, 600.0));
    assert!(approx(origin.x, 400.0) && approx(origin.y, 300.0));

    let back = m.pixel_to_world(Point::new(400.0, 300.0));
    assert!(approx(back.x, 0.0) && approx(back.y, 0.0));
}

#[test]
fn taller_window_expands_horizontally_centered() {
    // Requested aspect 4/2 = 2.0 versus display 0.75.
    let window = ViewWindow::new(-1.0, 1.0, 2.0, -2.0, true);
    let m = map_window(&window, vp(800, 600)).unwrap();

    assert_eq!(m.limits.y_top, 2.0);
    assert_eq!(m.limits.y_bottom, -2.0);
    assert!(approx(m.limits.x_left, -8.0 / 3.0));
    assert!(approx(m.limits.x_right, 8.0 / 3.0));
    assert!(approx(m.limits.x_left + m.limits.x_right, 0.0));
    assert!(approx(m.sx, 150.0));
    assert!(approx(m.sy, -150.0));
}

#[test]
fn wider_window_expands_vertically_centered() {
    let window = ViewWindow::new(-4.0, 4.0, 1.0, -1.0, true);
    let m = map_window(&window, vp(800, 600)).unwrap();

    assert_eq!(m.limits.x_left, -4.0);
    assert_eq!(m.limits.x_right, 4.0);
    assert!(approx(m.limits.y_top, 3.0));
    assert!(approx(m.limits.y_bottom, -3.0));
}

#[test]
fn without_preserve_aspect_axes_scale_independently() {
    let window = ViewWindow::new(0.0, 10.0, 0.0, 2.0, false);
    let m = map_window(&window, vp(100, 100)).unwrap();
    assert_eq!(m.limits, window);
    assert!(approx(m.sx, 10.0));
    assert!(approx(m.sy, 50.0));
    assert!(approx(m.pixel_size, 0.02));
}

#[test]
fn degenerate_windows_are_rejected() {
    let flat_x = ViewWindow::new(1.0, 1.0, 0.0, 1.0, false);
    let flat_y = ViewWindow::new(0.0, 1.0, 2.0, 2.0, true);
    let nan = ViewWindow::new(f64::NAN, 1.0, 0.0, 1.0, false);
    for w in [flat_x, flat_y, nan] {
        assert!(matches!(
            map_window(&w, vp(10, 10)),
            Err(HierError::Validation(_))
        ));
        assert!(CoordinateMapper::new(w).is_err());
    }
}

#[test]
fn mapper_recomputes_for_resized_viewport() {
    let mapper = CoordinateMapper::new(ViewWindow::new(-4.0, 4.0, 3.0, -3.0, false)).unwrap();
    let small = mapper.map(vp(400, 300)).unwrap();
    let large = mapper.map(vp(1600, 1200)).unwrap();
    assert!(approx(small.pixel_size, 0.02));
    assert!(approx(large.pixel_size, 0.005));
}

#[test]
fn mapper_keeps_the_requested_window_unadjusted() {
    let window = ViewWindow::new(-4.0, 4.0, 3.0, -3.0, true);
    let mapper = CoordinateMapper::new(window).unwrap();
    let mapping = mapper.map(vp(600, 300)).unwrap();
    assert_ne!(mapping.limits, window);
    assert_eq!(mapper.window(), &window);
}
