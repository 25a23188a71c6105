// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::OrbitCamera;
use constants::*;
use glam::Vec3;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn default_orbit_reproduces_the_configured_eye() {
    let orbit = OrbitCamera::default();
    assert!(approx(orbit.eye(), CAMERA_EYE));
    assert!((orbit.distance - (CAMERA_EYE - CAMERA_TARGET).length()).abs() < 1e-4);
}

#[test]
fn auto_rotation_slows_once_scattered() {
    let tree = OrbitCamera::auto_rotate_speed(0.0);
    let scattered = OrbitCamera::auto_rotate_speed(1.0);
    assert!(tree > scattered);
    assert_eq!(OrbitCamera::auto_rotate_speed(0.5), tree);
    assert!((tree - AUTO_ROTATE_TREE * AUTO_ROTATE_UNIT).abs() < 1e-6);
}

#[test]
fn auto_rotation_keeps_distance_and_height() {
    let mut orbit = OrbitCamera::default();
    let before = orbit.eye();
    for _ in 0..120 {
        orbit.auto_rotate(1.0 / 60.0, 0.0);
    }
    let after = orbit.eye();
    assert!(!approx(before, after));
    assert!((after.y - before.y).abs() < 1e-4);
    assert!(((after - orbit.target).length() - orbit.distance).abs() < 1e-3);
}

#[test]
fn negative_dt_does_not_rotate() {
    let mut orbit = OrbitCamera::default();
    let az = orbit.azimuth;
    orbit.auto_rotate(-1.0, 0.0);
    assert_eq!(orbit.azimuth, az);
}

#[test]
fn drag_clamps_polar_angle() {
    let mut orbit = OrbitCamera::default();
    orbit.drag(0.0, -100_000.0);
    assert!((orbit.polar - ORBIT_MAX_POLAR).abs() < 1e-6);
    // Never below the horizon.
    assert!(orbit.eye().y > orbit.target.y);
    orbit.drag(0.0, 100_000.0);
    assert!((orbit.polar - ORBIT_MIN_POLAR).abs() < 1e-6);
}

#[test]
fn orbit_input_only_while_gathered() {
    assert!(OrbitCamera::accepts_input(0.0));
    assert!(OrbitCamera::accepts_input(0.05));
    assert!(!OrbitCamera::accepts_input(0.1));
    assert!(!OrbitCamera::accepts_input(1.0));
}

#[test]
fn camera_pose_looks_at_target() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let pose = cam.pose();
    let expected = (CAMERA_TARGET - CAMERA_EYE).normalize();
    assert!(approx(pose.forward(), expected));
    assert!((cam.fovy_radians - CAMERA_FOV_Y_DEG.to_radians()).abs() < 1e-6);
}

#[test]
fn view_projection_maps_target_to_screen_center() {
    let cam = OrbitCamera::default().camera(1.0);
    let clip = cam.view_projection() * CAMERA_TARGET.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
