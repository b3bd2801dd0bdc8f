#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn identity() -> Camera {
    Camera { x: 0.0, y: 0.0, scale: 1.0 }
}

fn viewport(w: f64, h: f64) -> Viewport {
    Viewport { width: w, height: h }
}

fn image(w: f64, h: f64) -> Option<ImageDim> {
    Some(ImageDim { width: w, height: h })
}

// --- Defaults ---

#[test]
fn camera_default_matches_start_view() {
    let cam = Camera::default();
    assert_eq!(cam.x, START_X);
    assert_eq!(cam.y, START_Y);
    assert_eq!(cam.scale, START_SCALE);
}

// --- Coordinate conversions ---

#[test]
fn screen_to_world_identity() {
    let world = identity().screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_offset_and_scale() {
    let cam = Camera { x: 20.0, y: 10.0, scale: 2.0 };
    let world = cam.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn world_to_screen_with_offset_and_scale() {
    let cam = Camera { x: 20.0, y: 10.0, scale: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(approx_eq(screen.x, 35.0));
    assert!(approx_eq(screen.y, 25.0));
}

#[test]
fn round_trip_with_offset_and_scale() {
    let cam = Camera { x: 50.0, y: -30.0, scale: 2.0 };
    let world = Point::new(100.0, 200.0);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn screen_dist_to_world_divides_by_scale() {
    let cam = Camera { x: 999.0, y: -999.0, scale: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// --- zoom_at: scale step ---

#[test]
fn wheel_up_zooms_in_by_step() {
    let mut cam = identity();
    cam.zoom_at(Point::new(0.0, 0.0), -1.0, viewport(800.0, 600.0), None);
    assert!(approx_eq(cam.scale, ZOOM_STEP));
}

#[test]
fn wheel_down_zooms_out_by_step() {
    let mut cam = identity();
    cam.zoom_at(Point::new(0.0, 0.0), 1.0, viewport(800.0, 600.0), None);
    assert!(approx_eq(cam.scale, 1.0 / ZOOM_STEP));
}

#[test]
fn zoom_out_blocked_below_floor() {
    let mut cam = Camera { x: 0.0, y: 0.0, scale: 0.14 };
    let changed = cam.zoom_at(Point::new(0.0, 0.0), 1.0, viewport(800.0, 600.0), None);
    assert!(!changed);
    assert!(approx_eq(cam.scale, 0.14));
}

#[test]
fn zoom_in_still_allowed_below_floor() {
    let mut cam = Camera { x: 0.0, y: 0.0, scale: 0.14 };
    let changed = cam.zoom_at(Point::new(0.0, 0.0), -1.0, viewport(800.0, 600.0), None);
    assert!(changed);
    assert!(approx_eq(cam.scale, 0.14 * ZOOM_STEP));
}

#[test]
fn zoom_out_allowed_at_exact_floor() {
    // The guard is strictly-less-than: at exactly 0.15 one more step applies.
    let mut cam = Camera { x: 0.0, y: 0.0, scale: MIN_SCALE };
    let changed = cam.zoom_at(Point::new(0.0, 0.0), 1.0, viewport(800.0, 600.0), None);
    assert!(changed);
    assert!(approx_eq(cam.scale, MIN_SCALE / ZOOM_STEP));
}

// --- zoom_at: pointer anchoring ---

#[test]
fn zoom_keeps_world_point_under_pointer() {
    let mut cam = Camera { x: -100.0, y: -50.0, scale: 1.0 };
    let pointer = Point::new(300.0, 200.0);
    let before = cam.screen_to_world(pointer);
    cam.zoom_at(pointer, -1.0, viewport(4000.0, 4000.0), None);
    let after = cam.screen_to_world(pointer);
    assert!(point_approx_eq(before, after));
}

// --- constrain ---

#[test]
fn constrain_noop_without_image_dimensions() {
    let mut cam = Camera { x: 500.0, y: -9000.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), None);
    assert_eq!(cam.x, 500.0);
    assert_eq!(cam.y, -9000.0);
}

#[test]
fn constrain_forces_zero_when_image_smaller_than_viewport() {
    let mut cam = Camera { x: 120.0, y: -40.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), image(400.0, 300.0));
    assert_eq!(cam.x, 0.0);
    assert_eq!(cam.y, 0.0);
}

#[test]
fn constrain_clamps_positive_offset_to_zero() {
    let mut cam = Camera { x: 35.0, y: 12.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), image(2000.0, 2000.0));
    assert_eq!(cam.x, 0.0);
    assert_eq!(cam.y, 0.0);
}

#[test]
fn constrain_clamps_far_edge() {
    // image * scale = 2000; lower bound = 800 - 2000 = -1200.
    let mut cam = Camera { x: -5000.0, y: -5000.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), image(2000.0, 2000.0));
    assert_eq!(cam.x, -1200.0);
    assert_eq!(cam.y, -1400.0);
}

#[test]
fn constrain_in_range_offset_untouched() {
    let mut cam = Camera { x: -300.0, y: -250.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), image(2000.0, 2000.0));
    assert_eq!(cam.x, -300.0);
    assert_eq!(cam.y, -250.0);
}

#[test]
fn constrain_respects_scale() {
    // image 1000 at scale 0.5 -> extent 500 < viewport 800: forced to 0.
    let mut cam = Camera { x: -100.0, y: -100.0, scale: 0.5 };
    cam.constrain(viewport(800.0, 600.0), image(1000.0, 1000.0));
    assert_eq!(cam.x, 0.0);
    // extent 500 < 600 as well.
    assert_eq!(cam.y, 0.0);
}

#[test]
fn constrain_axes_independent() {
    // Wide, short image: x clamps into range, y forced to zero.
    let mut cam = Camera { x: -5000.0, y: -80.0, scale: 1.0 };
    cam.constrain(viewport(800.0, 600.0), image(3000.0, 200.0));
    assert_eq!(cam.x, 800.0 - 3000.0);
    assert_eq!(cam.y, 0.0);
}

// --- pan_by ---

#[test]
fn pan_by_applies_delta_then_clamps() {
    let mut cam = Camera { x: -10.0, y: -10.0, scale: 1.0 };
    cam.pan_by(100.0, 100.0, viewport(800.0, 600.0), image(2000.0, 2000.0));
    assert_eq!(cam.x, 0.0);
    assert_eq!(cam.y, 0.0);
}

#[test]
fn pan_by_unclamped_without_image() {
    let mut cam = identity();
    cam.pan_by(-40.0, 25.0, viewport(800.0, 600.0), None);
    assert_eq!(cam.x, -40.0);
    assert_eq!(cam.y, 25.0);
}
