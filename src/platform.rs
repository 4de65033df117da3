use crate::dom;
use crate::events::{self, EffectHandle, PointerBinding, ResizeBinding, VisibilityBinding};
use crate::frame::FrameLoop;
use crate::render::GpuBackend;
use ripple_core::{FallbackStyle, Listener, Platform, RippleEffect, RippleError, Size};
use web_sys as web;

pub type WebEffect = RippleEffect<DomPlatform, GpuBackend>;

/// Browser side of one effect: the container, its canvas and every listener
/// registered on their behalf.
pub struct DomPlatform {
    window: web::Window,
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    resize_debounce_ms: u32,
    handle: EffectHandle,
    frames: FrameLoop,
    pointer: Option<PointerBinding>,
    resize: Option<ResizeBinding>,
    visibility: Option<VisibilityBinding>,
}

impl DomPlatform {
    pub fn new(
        window: web::Window,
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        resize_debounce_ms: u32,
        handle: EffectHandle,
    ) -> Self {
        let frame_handle = handle.clone();
        let frames = FrameLoop::new(window.clone(), move || {
            events::with_effect(&frame_handle, |effect| {
                _ = effect.on_frame();
            });
        });
        Self {
            window,
            container,
            canvas,
            resize_debounce_ms,
            handle,
            frames,
            pointer: None,
            resize: None,
            visibility: None,
        }
    }
}

impl Platform for DomPlatform {
    fn container_size(&self) -> Size {
        dom::container_size(&self.container)
    }

    fn pixel_ratio(&self) -> f32 {
        dom::device_pixel_ratio(&self.window)
    }

    fn add_listener(&mut self, listener: Listener) -> Result<(), RippleError> {
        match listener {
            Listener::PointerMove => {
                if self.pointer.is_none() {
                    self.pointer = Some(events::bind_pointer_move(
                        &self.canvas,
                        &self.container,
                        self.handle.clone(),
                    )?);
                }
            }
            Listener::WindowResize => {
                if self.resize.is_none() {
                    self.resize = Some(events::bind_debounced_resize(
                        &self.window,
                        self.resize_debounce_ms,
                        self.handle.clone(),
                    )?);
                }
            }
        }
        Ok(())
    }

    fn remove_listener(&mut self, listener: Listener) {
        match listener {
            Listener::PointerMove => {
                if let Some(binding) = self.pointer.take() {
                    binding.unbind();
                }
            }
            Listener::WindowResize => {
                if let Some(binding) = self.resize.take() {
                    binding.unbind();
                }
            }
        }
    }

    fn observe_visibility(&mut self) -> Result<(), RippleError> {
        if self.visibility.is_none() {
            self.visibility = Some(events::bind_visibility(&self.container, self.handle.clone())?);
        }
        Ok(())
    }

    fn unobserve_visibility(&mut self) {
        if let Some(binding) = self.visibility.take() {
            binding.unbind();
        }
    }

    fn mount_surface(&mut self) -> Result<(), RippleError> {
        self.container
            .append_child(&self.canvas)
            .map_err(dom::js_err)?;
        Ok(())
    }

    fn unmount_surface(&mut self) {
        self.canvas.remove();
    }

    fn apply_fallback(&mut self, style: &FallbackStyle) {
        dom::apply_fallback_style(&self.canvas, style);
    }

    fn request_frame(&mut self) {
        self.frames.request();
    }

    fn cancel_frame(&mut self) {
        self.frames.cancel();
    }
}
