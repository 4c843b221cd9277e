use hero_core::DeviceProfile;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Read the device capability signals once. Never re-sampled; the session
/// keeps whatever tier this produced.
pub fn device_profile(window: &web::Window) -> DeviceProfile {
    let navigator = window.navigator();
    let cores = navigator.hardware_concurrency();
    let cpu_cores = if cores.is_finite() && cores >= 1.0 {
        Some(cores as u32)
    } else {
        None
    };
    let ua = navigator.user_agent().unwrap_or_default().to_lowercase();
    let is_mobile = MOBILE_TOKENS.iter().any(|t| ua.contains(t));
    let is_tablet = ua.contains("tablet")
        || ua.contains("ipad")
        || ua.contains("playbook")
        || ua.contains("silk")
        || (ua.contains("android") && !ua.contains("mobi"));
    DeviceProfile {
        cpu_cores,
        is_mobile,
        is_tablet,
    }
}

/// Keep the canvas backing store sized to CSS size x device pixel ratio,
/// with the ratio capped by the quality tier.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio as f64);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
