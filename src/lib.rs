#![cfg(target_arch = "wasm32")]
use ripple_core::{RippleConfig, TimeStep, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod dom;
mod events;
mod frame;
mod input;
mod platform;
mod render;
mod texture;

pub use api::Ripple;

thread_local! {
    // effects mounted from data attributes live as long as the page
    static MOUNTED: RefCell<Vec<Rc<RefCell<platform::WebEffect>>>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    if let Err(e) = mount_all() {
        log::error!("auto-mount error: {:?}", e);
    }
    Ok(())
}

/// Mount one effect into every element carrying `data-ripple-image`.
///
/// `data-ripple-variant` selects `continuous` (default) or `discrete`;
/// `data-ripple-debug` enables the camera overlay; `data-ripple-rate` sets a
/// per-second shader time rate instead of the fixed per-frame step.
fn mount_all() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all("[data-ripple-image]")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let config = match config_from_dataset(&el) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[ripple] element {} skipped: {}", i, e);
                continue;
            }
        };
        spawn_local(async move {
            if let Err(e) = mount(el, config).await {
                log::error!("[ripple] mount failed: {}", e);
            }
        });
    }
    Ok(())
}

fn config_from_dataset(el: &web::HtmlElement) -> anyhow::Result<RippleConfig> {
    let image = dom::data_attr(el, "rippleImage")
        .ok_or_else(|| anyhow::anyhow!("empty data-ripple-image"))?;
    let variant = match dom::data_attr(el, "rippleVariant") {
        Some(v) => v.parse::<Variant>()?,
        None => Variant::default(),
    };
    let time_step = match dom::data_attr(el, "rippleRate") {
        Some(rate) => rate.parse::<TimeStep>()?,
        None => TimeStep::default(),
    };
    Ok(RippleConfig::new(image)
        .with_variant(variant)
        .with_debug(dom::data_flag(el, "rippleDebug"))
        .with_time_step(time_step))
}

async fn mount(el: web::HtmlElement, config: RippleConfig) -> anyhow::Result<()> {
    let effect = api::create_effect(el, config).await?;
    if let Err(e) = api::init_effect(&effect).await {
        effect.borrow_mut().destroy();
        return Err(e.into());
    }
    // only running effects are kept; a failed one is dropped here
    MOUNTED.with(|m| m.borrow_mut().push(effect));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_count() -> usize {
        MOUNTED.with(|m| m.borrow().len())
    }

    #[wasm_bindgen_test(async)]
    async fn failed_mount_is_not_retained() {
        let document = dom::window_document().unwrap();
        let el = document
            .create_element("div")
            .unwrap()
            .dyn_into::<web::HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&el).unwrap();

        let before = mounted_count();
        let result = mount(el.clone(), RippleConfig::new("/does-not-exist.png")).await;
        assert!(result.is_err());
        assert_eq!(mounted_count(), before);
        assert_eq!(el.child_element_count(), 0);
        el.remove();
    }
}
