use crate::dom::js_err;
use ripple_core::{RippleError, Size};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct LoadedImage {
    pub element: web::HtmlImageElement,
    pub size: Size,
}

/// Load `url` into an image element, resolving once it has decoded.
///
/// Both `load` and `error` are wired, so a broken URL rejects with
/// `TextureLoad` instead of leaving the caller waiting forever.
pub async fn load_image(url: &str) -> Result<LoadedImage, RippleError> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;

    let img_for_promise = img.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img_for_promise.set_onload(Some(&resolve));
        img_for_promise.set_onerror(Some(&reject));
    });
    img.set_src(url);

    let result = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);

    if result.is_err() || img.natural_width() == 0 || img.natural_height() == 0 {
        log::error!("[texture] failed to load {}", url);
        return Err(RippleError::TextureLoad {
            url: url.to_string(),
        });
    }

    let size = Size::new(img.natural_width() as f32, img.natural_height() as f32);
    log::info!("[texture] loaded {} ({}x{})", url, img.natural_width(), img.natural_height());
    Ok(LoadedImage { element: img, size })
}
