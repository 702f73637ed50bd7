use super::color::{channel_from_ratio, ColorTween, Rgb8};
use super::constants::DRAG_BLUE_CHANNEL;
use super::ease::Ease;
use super::viewport::ViewportSize;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Derive the drag color for a page-space pointer position.
///
/// x maps to red and y to green across the viewport; blue is fixed.
pub fn target_color_for_pointer(page_x: f32, page_y: f32, viewport: &ViewportSize) -> Rgb8 {
    Rgb8::new(
        channel_from_ratio(page_x / viewport.width() as f32),
        channel_from_ratio(page_y / viewport.height() as f32),
        DRAG_BLUE_CHANNEL,
    )
}

/// Pointer-held recoloring of the sphere material.
#[derive(Clone, Debug)]
pub struct ColorDrag {
    phase: DragPhase,
    target: Option<Rgb8>,
    tween: ColorTween,
}

impl ColorDrag {
    pub fn new(initial: Vec3, duration_sec: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            target: None,
            tween: ColorTween::new(initial, duration_sec, Ease::Power1Out),
        }
    }

    pub fn pointer_down(&mut self) {
        if self.phase == DragPhase::Idle {
            log::debug!("[drag] begin");
        }
        self.phase = DragPhase::Dragging;
    }

    pub fn pointer_up(&mut self) {
        if self.phase == DragPhase::Dragging {
            log::debug!("[drag] end");
        }
        self.phase = DragPhase::Idle;
    }

    /// Recompute the target while dragging and restart the tween from
    /// `current`. Returns the new target, or `None` when idle.
    pub fn pointer_move(
        &mut self,
        page_x: f32,
        page_y: f32,
        viewport: &ViewportSize,
        current: Vec3,
    ) -> Option<Rgb8> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let target = target_color_for_pointer(page_x, page_y, viewport);
        self.target = Some(target);
        self.tween.retarget(current, target.to_unit());
        Some(target)
    }

    /// Step the interpolation; `Some(color)` while the material should change.
    #[inline]
    pub fn advance(&mut self, dt_sec: f32) -> Option<Vec3> {
        self.tween.advance(dt_sec)
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    #[inline]
    pub fn target(&self) -> Option<Rgb8> {
        self.target
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_active()
    }
}
