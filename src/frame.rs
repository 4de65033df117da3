use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` driven repeating task.
///
/// Each `request` arms exactly one callback. After `cancel` the token is set:
/// later requests are refused and a callback that still fires returns at once.
pub struct FrameLoop {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
    pending: Option<i32>,
}

impl FrameLoop {
    pub fn new(window: web::Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let cancelled = Rc::new(Cell::new(false));
        let token = cancelled.clone();
        let tick = Closure::wrap(Box::new(move || {
            if token.get() {
                return;
            }
            on_frame();
        }) as Box<dyn FnMut()>);
        Self {
            window,
            tick,
            cancelled,
            pending: None,
        }
    }

    pub fn request(&mut self) {
        if self.cancelled.get() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending = Some(id),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}
