/// Easing curves applied to normalized tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, the default curve for both tweens and the timeline.
    #[default]
    Power1Out,
}

impl Ease {
    /// Map progress `t` (clamped into [0, 1]) onto the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Ease::Linear => t,
            Ease::Power1Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
        }
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
