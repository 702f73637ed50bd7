use crate::core::InputEvent;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_page_px(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.page_x() as f32, ev.page_y() as f32)
}

/// Translate a DOM pointer event type into a scene input.
pub fn pointer_input(kind: &str, ev: &web::PointerEvent) -> Option<InputEvent> {
    let (x, y) = pointer_page_px(ev);
    match kind {
        "pointerdown" => Some(InputEvent::PointerDown { x, y }),
        "pointermove" => Some(InputEvent::PointerMove { x, y }),
        "pointerup" | "pointercancel" => Some(InputEvent::PointerUp),
        _ => None,
    }
}

#[inline]
pub fn wheel_input(ev: &web::WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: ev.delta_y() as f32,
    }
}
