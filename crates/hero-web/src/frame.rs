use std::cell::RefCell;
use std::rc::Rc;

use hero_core::{HeroScene, SceneConfig};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::events::PointerContext;
use crate::render;

pub struct FrameContext<'a> {
    pub scene: HeroScene,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerContext>>,
    pub gpu: render::GpuState<'a>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    /// One animation frame. The simulation may skip this frame on low-tier
    /// configs but the scene is always re-rendered from current state.
    pub fn frame(&mut self) {
        let now_sec = self.started.elapsed().as_secs_f64();

        let signal = {
            let mut p = self.pointer.borrow_mut();
            p.drain(js_sys::Date::now());
            p.signal
        };
        self.scene.tick(now_sec, &signal);

        let geometry = self.scene.frame_geometry(now_sec);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&geometry) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene_config: &SceneConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene_config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
