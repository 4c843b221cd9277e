#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use hero_core::{HeroScene, QualityTier, SceneConfig};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use events::PointerContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = match dom::window_document() {
        Some(pair) => pair,
        None => return Ok(()),
    };

    // Pages without the hero canvas simply don't get the background.
    let canvas_el = match document.get_element_by_id("hero-canvas") {
        Some(el) => el,
        None => {
            log::info!("no #hero-canvas element; skipping hero background");
            return Ok(());
        }
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let profile = dom::device_profile(&window);
    let tier = QualityTier::classify(&profile);
    let config = SceneConfig::for_tier(tier);
    log::info!(
        "device cores={:?} mobile={} tablet={} -> {:?}",
        profile.cpu_cores,
        profile.is_mobile,
        profile.is_tablet,
        tier
    );

    dom::sync_canvas_backing_size(&canvas, config.max_pixel_ratio);

    let pointer = Rc::new(RefCell::new(PointerContext::new()));
    events::attach_pointer_listener(&window, pointer.clone());
    events::attach_resize_listener(&window, &canvas, config.max_pixel_ratio);

    // WebGPU failure degrades to a blank canvas rather than breaking the page.
    let gpu = match frame::init_gpu(&canvas, &config).await {
        Some(g) => g,
        None => {
            log::warn!("WebGPU unavailable; hero background disabled");
            return Ok(());
        }
    };

    let seed = js_sys::Date::now() as u64;
    let scene = HeroScene::new(config, seed);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        pointer,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
