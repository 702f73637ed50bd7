/// Last observed window dimensions in CSS pixels.
///
/// Both sides are kept at least 1 so the aspect ratio is always defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    width: u32,
    height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Backing-store size for a given device pixel ratio.
    pub fn scaled(&self, pixel_ratio: f32) -> (u32, u32) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let w = (self.width as f32 * ratio).round() as u32;
        let h = (self.height as f32 * ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}
