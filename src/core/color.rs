use super::ease::Ease;
use glam::Vec3;

/// 8-bit RGB triple as produced by pointer mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Normalize into the [0, 1] range used by the material.
    #[inline]
    pub fn to_unit(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }
}

/// Map a ratio (nominally 0..=1) to a channel, rounding half up and clamping.
#[inline]
pub fn channel_from_ratio(ratio: f32) -> u8 {
    let v = (ratio * 255.0).round();
    if v.is_finite() {
        v.clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

/// Latest-wins interpolation of the material color.
///
/// Holds only the segment currently being played. `retarget` restarts the
/// segment from wherever the color is now, so a stale target never keeps
/// pulling against a newer one.
#[derive(Clone, Debug)]
pub struct ColorTween {
    from: Vec3,
    to: Vec3,
    elapsed: f32,
    duration: f32,
    ease: Ease,
    active: bool,
}

impl ColorTween {
    pub fn new(initial: Vec3, duration: f32, ease: Ease) -> Self {
        Self {
            from: initial,
            to: initial,
            elapsed: 0.0,
            duration: duration.max(0.0),
            ease,
            active: false,
        }
    }

    pub fn retarget(&mut self, current: Vec3, target: Vec3) {
        self.from = current;
        self.to = target;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Step the segment; returns the new color while a segment is playing.
    pub fn advance(&mut self, dt_sec: f32) -> Option<Vec3> {
        if !self.active {
            return None;
        }
        self.elapsed += dt_sec.max(0.0);
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            self.active = false;
            return Some(self.to);
        }
        Some(self.from.lerp(self.to, self.ease.apply(t)))
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.to
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
