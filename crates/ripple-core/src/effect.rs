//! Ripple effect lifecycle.
//!
//! `RippleEffect` holds everything that is not a browser or GPU API: phase,
//! interaction model, visibility gate, clock and the current cover fit. The
//! host environment and the renderer sit behind [`Platform`] and [`Backend`],
//! so the whole state machine runs on the host in tests.

use crate::clock::Clock;
use crate::config::RippleConfig;
use crate::error::RippleError;
use crate::fit::{cover_fit, local_to_uv, CoverFit, Size};
use crate::interaction::{model_for, InteractionModel};
use crate::uniforms::Uniforms;
use crate::visibility::{FallbackStyle, RenderPath, VisibilityGate};
use glam::Vec2;
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    Running,
    Destroyed,
}

/// Event subscriptions made by `start` and released by `destroy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Window-level resize, debounced by the platform.
    WindowResize,
    /// Pointer moves over the rendered surface.
    PointerMove,
}

/// Host environment around one effect instance.
pub trait Platform {
    /// Container size in CSS pixels.
    fn container_size(&self) -> Size;
    fn pixel_ratio(&self) -> f32;

    fn add_listener(&mut self, listener: Listener) -> Result<(), RippleError>;
    fn remove_listener(&mut self, listener: Listener);

    fn observe_visibility(&mut self) -> Result<(), RippleError>;
    fn unobserve_visibility(&mut self);

    /// Append the render surface to the container.
    fn mount_surface(&mut self) -> Result<(), RippleError>;
    fn unmount_surface(&mut self);

    fn apply_fallback(&mut self, style: &FallbackStyle);

    /// Schedule one call to [`RippleEffect::on_frame`].
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}

/// Renderer owning the surface, pipeline, quad and texture.
pub trait Backend {
    /// Resize the drawing buffer to `css` size times `pixel_ratio`.
    fn resize(&mut self, css: Size, pixel_ratio: f32);
    fn set_view(&mut self, fit: &CoverFit);
    fn upload(&mut self, uniforms: &Uniforms<'_>);
    fn draw(&mut self) -> Result<(), RippleError>;
    /// Release GPU resources. Further calls are no-ops.
    fn dispose(&mut self);
}

pub struct RippleEffect<P: Platform, B: Backend> {
    config: RippleConfig,
    platform: P,
    backend: B,
    model: Box<dyn InteractionModel>,
    gate: VisibilityGate,
    clock: Clock,
    image: Option<Size>,
    fit: CoverFit,
    phase: Phase,
    listeners: Vec<Listener>,
    observing: bool,
    mounted: bool,
}

impl<P: Platform, B: Backend> RippleEffect<P, B> {
    pub fn new(config: RippleConfig, platform: P, backend: B) -> Self {
        let model = model_for(config.variant);
        let clock = Clock::new(config.time_step);
        log::info!(
            "[ripple] constructed variant={} image={}",
            config.variant,
            config.image_url
        );
        Self {
            config,
            platform,
            backend,
            model,
            gate: VisibilityGate::default(),
            clock,
            image: None,
            fit: CoverFit::default(),
            phase: Phase::Constructed,
            listeners: Vec::new(),
            observing: false,
            mounted: false,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn model(&self) -> &dyn InteractionModel {
        self.model.as_ref()
    }

    pub fn fit(&self) -> CoverFit {
        self.fit
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn is_visible(&self) -> bool {
        self.gate.is_visible()
    }

    /// Begin running once the texture image has loaded.
    ///
    /// Observes visibility, mounts the surface, performs the first resize,
    /// subscribes to resize and pointer events and schedules the first frame.
    /// On failure everything registered so far is released again and the
    /// effect stays in `Constructed`.
    pub fn start(&mut self, image: Size) -> Result<(), RippleError> {
        self.ensure_constructed()?;
        // write-once: set here, read by resize and render afterwards
        self.image = Some(image);

        if let Err(e) = self.attach() {
            log::error!("[ripple] start failed: {}", e);
            self.detach();
            self.image = None;
            return Err(e);
        }

        self.phase = Phase::Running;
        self.platform.request_frame();
        log::info!(
            "[ripple] running image={}x{}",
            image.width as u32,
            image.height as u32
        );
        Ok(())
    }

    /// Finish `init` with the outcome of the texture load. A failed load is
    /// returned as is: nothing is attached and no frame is scheduled.
    pub fn start_loaded(&mut self, image: Result<Size, RippleError>) -> Result<(), RippleError> {
        self.ensure_constructed()?;
        match image {
            Ok(size) => self.start(size),
            Err(e) => {
                log::error!("[ripple] init aborted: {}", e);
                Err(e)
            }
        }
    }

    /// `Ok` while the effect has not been started or destroyed yet.
    pub fn ensure_constructed(&self) -> Result<(), RippleError> {
        if self.phase != Phase::Constructed {
            return Err(RippleError::InvalidPhase {
                expected: Phase::Constructed,
                found: self.phase,
            });
        }
        Ok(())
    }

    fn attach(&mut self) -> Result<(), RippleError> {
        self.platform.observe_visibility()?;
        self.observing = true;

        self.platform.mount_surface()?;
        self.mounted = true;

        self.resize_now();

        for listener in [Listener::WindowResize, Listener::PointerMove] {
            self.platform.add_listener(listener)?;
            self.listeners.push(listener);
        }
        Ok(())
    }

    fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            self.platform.remove_listener(listener);
        }
        if self.observing {
            self.platform.unobserve_visibility();
            self.observing = false;
        }
        if self.mounted {
            self.platform.unmount_surface();
            self.mounted = false;
        }
    }

    /// Debounced window resize fired.
    pub fn on_resize(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.resize_now();
    }

    fn resize_now(&mut self) {
        let container = self.platform.container_size();
        let ratio = self.platform.pixel_ratio();
        self.fit = cover_fit(container, self.image);
        self.backend.resize(container, ratio);
        self.backend.set_view(&self.fit);
        log::log!(
            self.config.diagnostics_level(),
            "[resize] container={}x{} bounds={:?} scale=({:.3},{:.3})",
            container.width,
            container.height,
            self.fit.bounds,
            self.fit.scale.x,
            self.fit.scale.y
        );
    }

    /// Pointer moved to `local`, in CSS pixels relative to the container's
    /// top-left corner.
    pub fn on_pointer_move(&mut self, local: Vec2) {
        if self.phase != Phase::Running {
            return;
        }
        let uv = local_to_uv(local, self.platform.container_size());
        let elapsed = self.clock.elapsed();
        self.model.pointer_moved(uv, elapsed);
        if self.model.uploads_on_pointer() {
            self.backend.upload(&self.model.uniforms(elapsed));
        }
    }

    /// Intersection observer reported a new state.
    pub fn on_visibility(&mut self, intersecting: bool) {
        if self.gate.observe(intersecting) {
            log::debug!("[visibility] visible={}", intersecting);
            if !intersecting {
                self.clock.pause();
            }
        }
    }

    /// One animation frame. Re-arms the next frame while running.
    pub fn on_frame(&mut self) -> ControlFlow<()> {
        if self.phase != Phase::Running {
            return ControlFlow::Break(());
        }

        match self.gate.next_path() {
            RenderPath::Live => {
                let elapsed = self.clock.tick();
                self.model.advance();
                self.backend.upload(&self.model.uniforms(elapsed));
                self.draw();
            }
            RenderPath::Fallback => {
                let style = FallbackStyle::for_image(&self.config.image_url);
                self.platform.apply_fallback(&style);
                self.backend
                    .upload(&self.model.uniforms(self.clock.elapsed()));
                self.draw();
            }
            RenderPath::Skip => {}
        }

        self.platform.request_frame();
        ControlFlow::Continue(())
    }

    fn draw(&mut self) {
        if let Err(e) = self.backend.draw() {
            log::warn!("[ripple] draw failed: {}", e);
        }
    }

    /// Tear down: release listeners, the observer, the pending frame, GPU
    /// resources and the surface. A second call does nothing.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            log::debug!("[ripple] destroy called twice; ignoring");
            return;
        }
        self.platform.cancel_frame();
        self.detach();
        self.backend.dispose();
        self.phase = Phase::Destroyed;
        log::info!("[ripple] destroyed");
    }
}
