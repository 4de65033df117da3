use crate::dom::js_err;
use crate::input;
use crate::platform::WebEffect;
use ripple_core::constants::VISIBILITY_THRESHOLDS;
use ripple_core::{Debounce, RippleError};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Handle listeners use to reach their effect without keeping it alive.
pub type EffectHandle = Weak<RefCell<WebEffect>>;

pub fn with_effect(handle: &EffectHandle, f: impl FnOnce(&mut WebEffect)) {
    let Some(cell) = handle.upgrade() else {
        return;
    };
    match cell.try_borrow_mut() {
        Ok(mut effect) => f(&mut effect),
        Err(_) => log::warn!("[ripple] effect busy; event dropped"),
    };
}

// ---------------- pointermove on the canvas ----------------

pub struct PointerBinding {
    canvas: web::HtmlCanvasElement,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

pub fn bind_pointer_move(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    handle: EffectHandle,
) -> Result<PointerBinding, RippleError> {
    let container = container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let local = input::pointer_local(&ev, &container);
        with_effect(&handle, |effect| effect.on_pointer_move(local));
    }) as Box<dyn FnMut(_)>);
    canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(PointerBinding {
        canvas: canvas.clone(),
        closure,
    })
}

impl PointerBinding {
    pub fn unbind(self) {
        _ = self
            .canvas
            .remove_event_listener_with_callback("pointermove", self.closure.as_ref().unchecked_ref());
    }
}

// ---------------- debounced window resize ----------------

pub struct ResizeBinding {
    window: web::Window,
    on_resize: Closure<dyn FnMut()>,
    timer: Rc<RefCell<ResizeTimer>>,
    // keeps the timeout callback alive while a timer is pending
    _fire: Rc<Closure<dyn FnMut(JsValue)>>,
}

// Debounce keyed by a burst sequence number; `timeout` is the browser id to clear.
struct ResizeTimer {
    debounce: Debounce<u32>,
    seq: u32,
    timeout: Option<i32>,
}

pub fn bind_debounced_resize(
    window: &web::Window,
    delay_ms: u32,
    handle: EffectHandle,
) -> Result<ResizeBinding, RippleError> {
    let timer = Rc::new(RefCell::new(ResizeTimer {
        debounce: Debounce::new(delay_ms),
        seq: 0,
        timeout: None,
    }));

    let timer_fire = timer.clone();
    let fire = Rc::new(Closure::wrap(Box::new(move |seq: JsValue| {
        let Some(seq) = seq.as_f64().map(|s| s as u32) else {
            return;
        };
        let due = {
            let mut t = timer_fire.borrow_mut();
            let due = t.debounce.fire(&seq);
            if due {
                t.timeout = None;
            }
            due
        };
        if due {
            with_effect(&handle, |effect| effect.on_resize());
        }
    }) as Box<dyn FnMut(JsValue)>));

    let window_resize = window.clone();
    let timer_resize = timer.clone();
    let fire_resize = fire.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let mut t = timer_resize.borrow_mut();
        t.seq = t.seq.wrapping_add(1);
        let seq = t.seq;
        if t.debounce.arm(seq).is_some() {
            if let Some(id) = t.timeout.take() {
                window_resize.clear_timeout_with_handle(id);
            }
        }
        let delay = i32::try_from(t.debounce.delay_ms()).unwrap_or(i32::MAX);
        match window_resize.set_timeout_with_callback_and_timeout_and_arguments_1(
            fire_resize.as_ref().as_ref().unchecked_ref(),
            delay,
            &JsValue::from(seq),
        ) {
            Ok(id) => t.timeout = Some(id),
            Err(e) => {
                t.debounce.cancel();
                log::warn!("[resize] setTimeout failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(js_err)?;

    Ok(ResizeBinding {
        window: window.clone(),
        on_resize,
        timer,
        _fire: fire,
    })
}

impl ResizeBinding {
    pub fn unbind(self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let mut t = self.timer.borrow_mut();
        t.debounce.cancel();
        if let Some(id) = t.timeout.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

// ---------------- container visibility ----------------

pub struct VisibilityBinding {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

pub fn bind_visibility(
    container: &web::Element,
    handle: EffectHandle,
) -> Result<VisibilityBinding, RippleError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            // several entries may be batched; the latest one wins
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting())
                .last();
            if let Some(intersecting) = latest {
                with_effect(&handle, |effect| effect.on_visibility(intersecting));
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let thresholds = js_sys::Array::new();
    for t in VISIBILITY_THRESHOLDS {
        thresholds.push(&t.into());
    }
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&thresholds);

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    observer.observe(container);

    Ok(VisibilityBinding {
        observer,
        _callback: callback,
    })
}

impl VisibilityBinding {
    pub fn unbind(self) {
        self.observer.disconnect();
    }
}
