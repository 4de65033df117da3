use ripple_core::{FallbackStyle, RippleError, Size};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> RippleError {
    RippleError::Js(format!("{:?}", e))
}

/// Fresh canvas that fills its container as a block element.
pub fn create_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement, RippleError> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| RippleError::Js("created element is not a canvas".into()))?;
    _ = canvas.style().set_property("display", "block");
    // the canvas receives pointer events directly; keep touch panning for scrolling
    _ = canvas.style().set_property("touch-action", "pan-y");
    Ok(canvas)
}

/// Container size in CSS pixels, never zero.
#[inline]
pub fn container_size(container: &web::HtmlElement) -> Size {
    Size::new(
        container.client_width().max(1) as f32,
        container.client_height().max(1) as f32,
    )
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f32 {
    let dpr = window.device_pixel_ratio() as f32;
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

pub fn apply_fallback_style(el: &web::HtmlElement, style: &FallbackStyle) {
    let css = el.style();
    for (property, value) in style.declarations() {
        if let Err(e) = css.set_property(property, value) {
            log::warn!("[visibility] could not set {}: {:?}", property, e);
        }
    }
}

/// `data-*` attribute by its dataset key (camelCase, without the prefix).
#[inline]
pub fn data_attr(el: &web::HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key).filter(|s| !s.trim().is_empty())
}

/// Boolean `data-*` flag: present and not `"false"`/`"0"`.
pub fn data_flag(el: &web::HtmlElement, key: &str) -> bool {
    match el.dataset().get(key) {
        Some(v) => !matches!(v.trim(), "false" | "0"),
        None => false,
    }
}
