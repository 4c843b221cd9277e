use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use hero_core::{InputSignal, Throttled, POINTER_THROTTLE_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Shared pointer state written by listeners and drained by the frame loop.
pub struct PointerContext {
    pub throttle: Throttled<Vec2>,
    pub signal: InputSignal,
}

impl PointerContext {
    pub fn new() -> Self {
        Self {
            throttle: Throttled::new(POINTER_THROTTLE_MS),
            signal: InputSignal::default(),
        }
    }

    /// Apply any sample whose throttle window has elapsed. The latest
    /// sample within a window wins; earlier ones were already dropped.
    pub fn drain(&mut self, now_ms: f64) {
        if let Some(offset) = self.throttle.take_ready(now_ms) {
            self.signal.pointer = offset;
        }
    }
}

/// Throttled pointer-move listener feeding the viewport-center offset into
/// the shared pointer state.
pub fn attach_pointer_listener(window: &web::Window, ctx: Rc<RefCell<PointerContext>>) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let h = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0);
        let offset = Vec2::new(
            ev.client_x() as f32 - w as f32 / 2.0,
            ev.client_y() as f32 - h as f32 / 2.0,
        );
        let mut p = ctx.borrow_mut();
        p.throttle.push(offset);
        p.drain(js_sys::Date::now());
    }) as Box<dyn FnMut(_)>);
    let _ = window
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resize is applied immediately (backing size now, projection at the next
/// frame from the new size); never throttled.
pub fn attach_resize_listener(window: &web::Window, canvas: &web::HtmlCanvasElement, max_pixel_ratio: f32) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
