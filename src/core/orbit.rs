use super::camera::PerspectiveCamera;
use super::constants::*;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

// large enough that acos(cos(phi)) stays above zero in f32
const POLE_EPS: f32 = 1e-3;

/// Spherical coordinates around the orbit target (Y up).
///
/// `phi` is the polar angle from +Y, `theta` the azimuth from +Z towards +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }

    /// Keep phi off the poles so look-at never degenerates.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPS, PI - POLE_EPS);
    }
}

#[derive(Clone, Debug)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_rotate: bool,
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub zoom_speed: f32,
    pub auto_rotate: bool,
    /// Turns per minute (5 => one turn every 12 s).
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            enable_rotate: true,
            rotate_speed: ORBIT_ROTATE_SPEED,
            enable_zoom: false,
            zoom_speed: ORBIT_ZOOM_SPEED,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

/// Damped orbit around a fixed target. Panning is not offered.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub config: OrbitConfig,
    pub target: Vec3,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    rotating: bool,
    rotate_start: Vec2,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig, target: Vec3) -> Self {
        Self {
            config,
            target,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            rotating: false,
            rotate_start: Vec2::ZERO,
        }
    }

    pub fn begin_rotate(&mut self, x: f32, y: f32) {
        if !self.config.enable_rotate {
            return;
        }
        self.rotating = true;
        self.rotate_start = Vec2::new(x, y);
    }

    /// Queue rotation for a pointer move. A full viewport height of
    /// vertical travel is one full turn.
    pub fn rotate_to(&mut self, x: f32, y: f32, viewport_height: f32) {
        if !self.rotating {
            return;
        }
        let end = Vec2::new(x, y);
        let delta = (end - self.rotate_start) * self.config.rotate_speed;
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * delta.x / h);
        self.rotate_up(TAU * delta.y / h);
        self.rotate_start = end;
    }

    pub fn end_rotate(&mut self) {
        self.rotating = false;
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Wheel dolly; ignored unless zoom is enabled.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.config.enable_zoom || delta_y == 0.0 {
            return;
        }
        let step = 0.95_f32.powf(self.config.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else {
            self.scale /= step;
        }
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    #[inline]
    fn auto_rotation_angle(&self, dt_sec: f32) -> f32 {
        TAU / 60.0 * self.config.auto_rotate_speed * dt_sec
    }

    /// Share of the pending rotation applied this step.
    ///
    /// `damping_factor` is defined per reference frame, so the blend is
    /// rescaled by `dt` to keep motion independent of the display rate.
    fn step_blend(&self, dt_sec: f32) -> f32 {
        if !self.config.enable_damping {
            return 1.0;
        }
        let frames = dt_sec.max(0.0) * ORBIT_REFERENCE_FPS;
        let keep = (1.0 - self.config.damping_factor.clamp(0.0, 1.0)).powf(frames);
        1.0 - keep
    }

    /// Advance one frame: apply auto-rotate and damped rotation, then move
    /// the camera and re-aim it at the target.
    pub fn advance(&mut self, camera: &mut PerspectiveCamera, dt_sec: f32) {
        let dt_sec = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let mut s = Spherical::from_offset(camera.position - self.target);

        if self.config.auto_rotate && !self.rotating {
            self.rotate_left(self.auto_rotation_angle(dt_sec));
        }

        let blend = self.step_blend(dt_sec);
        s.theta += self.delta_theta * blend;
        s.phi += self.delta_phi * blend;
        s.phi = s
            .phi
            .clamp(self.config.min_polar_angle, self.config.max_polar_angle);
        s.make_safe();
        s.radius = (s.radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);

        camera.position = self.target + s.to_offset();
        camera.look_at(self.target);

        if self.config.enable_damping {
            self.delta_theta *= 1.0 - blend;
            self.delta_phi *= 1.0 - blend;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
    }
}
