// Host-side tests for the damped orbit controls and the perspective camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use camera::*;
use glam::Vec3;
use orbit::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const DT: f32 = 1.0 / 60.0;

fn theta_of(cam: &PerspectiveCamera) -> f32 {
    Spherical::from_offset(cam.position).theta
}

/// Clockwise (decreasing theta) travel from `a` to `b`, in [0, TAU).
fn cw_travel(a: f32, b: f32) -> f32 {
    (a - b).rem_euclid(TAU)
}

fn no_auto() -> OrbitConfig {
    OrbitConfig {
        auto_rotate: false,
        ..OrbitConfig::default()
    }
}

#[test]
fn spherical_matches_default_camera_position() {
    let s = Spherical::from_offset(Vec3::new(0.0, 0.0, 20.0));
    assert!((s.radius - 20.0).abs() < 1e-5);
    assert!((s.phi - FRAC_PI_2).abs() < 1e-5);
    assert!(s.theta.abs() < 1e-6);
    assert!((s.to_offset() - Vec3::new(0.0, 0.0, 20.0)).length() < 1e-4);
}

#[test]
fn default_config_disables_zoom_and_enables_auto_rotate() {
    let cfg = OrbitConfig::default();
    assert!(cfg.enable_damping);
    assert!(!cfg.enable_zoom);
    assert!(cfg.auto_rotate);
    assert_eq!(cfg.auto_rotate_speed, 5.0);
}

#[test]
fn auto_rotate_orbits_at_constant_distance() {
    let mut cam = PerspectiveCamera::scene_default(4.0 / 3.0);
    let mut controls = OrbitControls::new(OrbitConfig::default(), Vec3::ZERO);
    for _ in 0..120 {
        controls.advance(&mut cam, DT);
        assert!((cam.position.length() - 20.0).abs() < 1e-3);
        assert_eq!(cam.target, Vec3::ZERO);
    }
    assert!(cw_travel(0.0, theta_of(&cam)) > 0.05);
}

#[test]
fn auto_rotate_settles_to_configured_rate() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(OrbitConfig::default(), Vec3::ZERO);
    for _ in 0..600 {
        controls.advance(&mut cam, DT);
    }
    let before = theta_of(&cam);
    for _ in 0..60 {
        controls.advance(&mut cam, DT);
    }
    let per_sec = cw_travel(before, theta_of(&cam));
    let expected = TAU / 60.0 * 5.0;
    assert!((per_sec - expected).abs() < 1e-3, "rate {per_sec} vs {expected}");
}

#[test]
fn motion_does_not_depend_on_frame_rate() {
    let run = |dt: f32, frames: usize| {
        let mut cam = PerspectiveCamera::scene_default(1.0);
        let mut controls = OrbitControls::new(OrbitConfig::default(), Vec3::ZERO);
        for _ in 0..frames {
            controls.advance(&mut cam, dt);
        }
        theta_of(&cam)
    };
    let at_60 = run(1.0 / 60.0, 600);
    let at_30 = run(1.0 / 30.0, 300);
    let diff = cw_travel(at_30, at_60).min(cw_travel(at_60, at_30));
    assert!(diff < 1e-2, "60fps={at_60} 30fps={at_30}");
}

#[test]
fn drag_rotation_decays_smoothly_after_release() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(no_auto(), Vec3::ZERO);
    controls.begin_rotate(0.0, 0.0);
    controls.rotate_to(100.0, 0.0, 600.0);
    controls.end_rotate();

    let mut prev_theta = theta_of(&cam);
    let mut prev_step = f32::MAX;
    for _ in 0..30 {
        controls.advance(&mut cam, DT);
        let t = theta_of(&cam);
        let step = cw_travel(prev_theta, t);
        assert!(step > 0.0, "still moving after release");
        assert!(step < prev_step, "motion decays");
        prev_step = step;
        prev_theta = t;
    }
    for _ in 0..600 {
        controls.advance(&mut cam, DT);
    }
    let total = cw_travel(0.0, theta_of(&cam));
    assert!((total - TAU * 100.0 / 600.0).abs() < 1e-3, "total {total}");
}

#[test]
fn undamped_rotation_applies_in_one_step() {
    let cfg = OrbitConfig {
        enable_damping: false,
        ..no_auto()
    };
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(cfg, Vec3::ZERO);
    controls.begin_rotate(0.0, 0.0);
    controls.rotate_to(150.0, 0.0, 600.0);
    controls.advance(&mut cam, DT);
    assert!((cw_travel(0.0, theta_of(&cam)) - FRAC_PI_2).abs() < 1e-4);
    let after = theta_of(&cam);
    controls.advance(&mut cam, DT);
    assert!((theta_of(&cam) - after).abs() < 1e-6);
}

#[test]
fn moves_without_begin_do_not_rotate() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(no_auto(), Vec3::ZERO);
    controls.rotate_to(300.0, 300.0, 600.0);
    for _ in 0..10 {
        controls.advance(&mut cam, DT);
    }
    assert!((cam.position - Vec3::new(0.0, 0.0, 20.0)).length() < 1e-4);
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(no_auto(), Vec3::ZERO);
    controls.begin_rotate(0.0, 0.0);
    controls.rotate_to(0.0, 5000.0, 600.0);
    for _ in 0..600 {
        controls.advance(&mut cam, DT);
        let s = Spherical::from_offset(cam.position);
        assert!(s.phi > 0.0 && s.phi < PI);
        assert!(cam.position.is_finite());
    }
}

#[test]
fn wheel_is_ignored_when_zoom_disabled() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(no_auto(), Vec3::ZERO);
    controls.wheel(-120.0);
    controls.advance(&mut cam, DT);
    assert!((cam.position.length() - 20.0).abs() < 1e-4);
}

#[test]
fn wheel_dollies_when_zoom_enabled() {
    let cfg = OrbitConfig {
        enable_zoom: true,
        min_distance: 5.0,
        ..no_auto()
    };
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(cfg, Vec3::ZERO);
    controls.wheel(-120.0);
    controls.advance(&mut cam, DT);
    assert!((cam.position.length() - 19.0).abs() < 1e-3);
    for _ in 0..200 {
        controls.wheel(-120.0);
        controls.advance(&mut cam, DT);
    }
    assert!((cam.position.length() - 5.0).abs() < 1e-3);
}

#[test]
fn zero_dt_leaves_camera_in_place() {
    let mut cam = PerspectiveCamera::scene_default(1.0);
    let mut controls = OrbitControls::new(OrbitConfig::default(), Vec3::ZERO);
    controls.advance(&mut cam, 0.0);
    assert!((cam.position - Vec3::new(0.0, 0.0, 20.0)).length() < 1e-4);
}

#[test]
fn projection_is_stale_until_refreshed() {
    let mut cam = PerspectiveCamera::scene_default(800.0 / 600.0);
    let before = cam.projection_matrix();
    cam.aspect = 2.0;
    assert_eq!(cam.projection_matrix(), before);
    cam.update_projection_matrix();
    let expected = glam::Mat4::perspective_rh(45f32.to_radians(), 2.0, 0.1, 100.0);
    assert_eq!(cam.projection_matrix(), expected);
}
