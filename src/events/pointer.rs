use crate::core::Scene;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route window pointer events and canvas wheel events into the scene.
///
/// Pointer listeners sit on the window so a drag keeps recoloring even
/// when the pointer leaves the canvas.
pub fn wire_input_handlers(scene: Rc<RefCell<Scene>>, canvas: &web::HtmlCanvasElement) {
    for kind in ["pointerdown", "pointermove", "pointerup", "pointercancel"] {
        wire_pointer(kind, scene.clone());
    }
    wire_wheel(scene, canvas);
}

fn wire_pointer(kind: &'static str, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(input) = input::pointer_input(kind, &ev) {
            scene.borrow_mut().handle(input);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(scene: Rc<RefCell<Scene>>, canvas: &web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let zoom_enabled = scene.borrow().controls.config.enable_zoom;
        if zoom_enabled {
            ev.prevent_default();
            scene.borrow_mut().handle(input::wheel_input(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
