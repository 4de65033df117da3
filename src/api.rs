use crate::dom;
use crate::platform::{DomPlatform, WebEffect};
use crate::render::GpuBackend;
use crate::texture;
use ripple_core::{RippleConfig, RippleEffect, RippleError, TimeStep, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

pub fn to_js(e: RippleError) -> JsValue {
    to_js_message(&e)
}

fn to_js_message(e: &dyn std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Create the canvas and GPU backend for `container`. Nothing is attached to
/// the page yet.
pub async fn create_effect(
    container: web::HtmlElement,
    config: RippleConfig,
) -> Result<Rc<RefCell<WebEffect>>, RippleError> {
    if !container.is_connected() {
        return Err(RippleError::MissingContainer);
    }
    let window = web::window().ok_or_else(|| RippleError::Js("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| RippleError::Js("no document".into()))?;

    let canvas = dom::create_canvas(&document)?;
    let (w, h) =
        dom::container_size(&container).to_device_pixels(dom::device_pixel_ratio(&window));
    canvas.set_width(w);
    canvas.set_height(h);

    let backend = GpuBackend::new(&canvas, config.variant, config.debug).await?;
    let debounce_ms = config.resize_debounce_ms;

    Ok(Rc::new_cyclic(|handle| {
        let platform = DomPlatform::new(window, container, canvas, debounce_ms, handle.clone());
        RefCell::new(RippleEffect::new(config, platform, backend))
    }))
}

/// Await the texture image, upload it and start the effect.
pub async fn init_effect(effect: &Rc<RefCell<WebEffect>>) -> Result<(), RippleError> {
    let url = effect.borrow().config().image_url.clone();
    let loaded = texture::load_image(&url).await;

    let mut effect = effect
        .try_borrow_mut()
        .map_err(|_| RippleError::Js("effect busy during init".into()))?;
    effect.ensure_constructed()?;
    if let Ok(image) = &loaded {
        effect.backend_mut().upload_image(&image.element, image.size);
    }
    effect.start_loaded(loaded.map(|image| image.size))
}

/// JS handle for one ripple effect.
///
/// ```js
/// const ripple = await Ripple.create(el, "/img/hero.jpg", "continuous", false, 1.0);
/// await ripple.init();
/// // later
/// ripple.destroy();
/// ```
#[wasm_bindgen]
pub struct Ripple {
    effect: Rc<RefCell<WebEffect>>,
}

#[wasm_bindgen]
impl Ripple {
    /// Build the renderer. `time_rate` switches shader time from a fixed
    /// per-frame step to that many units per second. Rejects when no GPU
    /// backend can be acquired.
    pub async fn create(
        container: web::HtmlElement,
        image_url: String,
        variant: Option<String>,
        debug: Option<bool>,
        time_rate: Option<f32>,
    ) -> Result<Ripple, JsValue> {
        let variant = match variant {
            Some(v) => v.parse::<Variant>().map_err(|e| to_js_message(&e))?,
            None => Variant::default(),
        };
        let time_step = match time_rate {
            Some(rate) => TimeStep::per_second(rate).map_err(|e| to_js_message(&e))?,
            None => TimeStep::default(),
        };
        let config = RippleConfig::new(image_url)
            .with_variant(variant)
            .with_debug(debug.unwrap_or(false))
            .with_time_step(time_step);
        let effect = create_effect(container, config).await.map_err(to_js)?;
        Ok(Ripple { effect })
    }

    /// Resolves once the texture has loaded and the frame loop is running.
    /// Rejects (and starts nothing) when the image fails to load.
    pub fn init(&self) -> js_sys::Promise {
        let effect = self.effect.clone();
        future_to_promise(async move {
            init_effect(&effect)
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(to_js)
        })
    }

    pub fn destroy(&self) {
        match self.effect.try_borrow_mut() {
            Ok(mut effect) => effect.destroy(),
            Err(_) => log::warn!("[ripple] destroy while effect busy; ignored"),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.effect.borrow().config().variant.to_string()
    }

    #[wasm_bindgen(getter, js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.effect.borrow().is_visible()
    }
}

impl Drop for Ripple {
    fn drop(&mut self) {
        if let Ok(mut effect) = self.effect.try_borrow_mut() {
            effect.destroy();
        }
    }
}
