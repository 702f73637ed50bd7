#![cfg(target_arch = "wasm32")]
use crate::core::{
    Scene, SphereMesh, RENDER_PIXEL_RATIO, SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS,
    SPHERE_WIDTH_SEGMENTS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // The entrance timeline lives in the scene, so the scene is built once.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init called twice; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::query_canvas(&document, constants::CANVAS_SELECTOR)?;

    let viewport = dom::window_viewport(&window);
    let scene = Rc::new(RefCell::new(Scene::new(viewport, RENDER_PIXEL_RATIO)));
    dom::apply_canvas_size(&canvas, scene.borrow().surface_size(), viewport);

    events::wire_resize(scene.clone(), canvas.clone());
    events::wire_input_handlers(scene.clone(), &canvas);

    let sphere = SphereMesh::new(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    let gpu = frame::init_gpu(&canvas, &sphere).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        document,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
