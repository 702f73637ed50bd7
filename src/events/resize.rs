use crate::core::{InputEvent, Scene};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep viewport, camera lens and canvas in step with the window.
///
/// Everything is updated inside the handler so no frame sees a resized
/// canvas with a stale projection.
pub fn wire_resize(scene: Rc<RefCell<Scene>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else { return };
        let viewport = dom::window_viewport(&window);
        let backing = {
            let mut s = scene.borrow_mut();
            s.handle(InputEvent::Resize {
                width: viewport.width(),
                height: viewport.height(),
            });
            s.surface_size()
        };
        dom::apply_canvas_size(&canvas, backing, viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
