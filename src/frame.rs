use crate::core::scene::smooth_frame_dt;
use crate::core::{Scene, SphereMesh};
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub document: web::Document,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = smooth_frame_dt(dt.as_secs_f32());

        let mut scene = self.scene.borrow_mut();
        for (property, value) in scene.tick_animations(dt_sec) {
            overlay::apply(&self.document, property, value);
        }

        match &mut self.gpu {
            Some(g) => match scene.render_frame(dt_sec, g) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            },
            // no GPU: keep the camera moving so state stays consistent
            None => scene.advance_camera(dt_sec),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, sphere: &SphereMesh) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, sphere).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame` from requestAnimationFrame; each tick schedules the next
/// one only after the current frame has been drawn.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
