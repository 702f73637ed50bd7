use crate::core::ViewportSize;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query_canvas(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{selector} is not a canvas: {:?}", e))
}

/// Current window inner size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> ViewportSize {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    ViewportSize::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Size the canvas like a renderer `setSize`: CSS box = viewport, backing
/// store = viewport * pixel ratio.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, backing: (u32, u32), viewport: ViewportSize) {
    canvas.set_width(backing.0.max(1));
    canvas.set_height(backing.1.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width()));
    _ = style.set_property("height", &format!("{}px", viewport.height()));
}

/// Set one inline style property on every element matching `selector`.
/// Returns how many elements were touched; zero matches is not an error.
pub fn set_style_all(document: &web::Document, selector: &str, name: &str, value: &str) -> u32 {
    let Ok(list) = document.query_selector_all(selector) else {
        return 0;
    };
    let mut touched = 0;
    for i in 0..list.length() {
        let Some(node) = list.get(i) else { continue };
        if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
            if el.style().set_property(name, value).is_ok() {
                touched += 1;
            }
        }
    }
    touched
}
