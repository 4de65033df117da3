use ripple_core::{Backend, CoverFit, RippleError, Size, Uniforms, Variant, ViewUniforms};
use web_sys as web;

mod debug;
mod helpers;
mod quad;

use quad::{create_quad_resources, QuadResources};

// ===================== wgpu state for one effect =====================

pub struct GpuBackend {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    quad: QuadResources,
    // Camera helper overlay, only built in debug mode
    debug_pipeline: Option<wgpu::RenderPipeline>,
    sampler: wgpu::Sampler,
    texture: wgpu::Texture,
    texture_view: wgpu::TextureView,
    clear_color: wgpu::Color,
    disposed: bool,
}

impl GpuBackend {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        variant: Variant,
        debug: bool,
    ) -> Result<Self, RippleError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RippleError::Backend(format!("create_surface: {e}")))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| RippleError::Backend("no GPU adapter".into()))?;
        log::info!("[gpu] adapter backend={:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2-safe baseline, raised to what the adapter supports so
                    // large images still fit in one texture
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: Some("ripple_device"),
                },
                None,
            )
            .await
            .map_err(|e| RippleError::Backend(format!("request_device: {e}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RippleError::Backend("surface reports no formats".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("image_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        // 1x1 placeholder until the image arrives
        let (texture, texture_view) = helpers::create_image_texture(&device, "placeholder", 1, 1);
        helpers::fill_texel(&queue, &texture, [24, 24, 28, 255]);

        let shader_source = ripple_core::shader_source(variant);
        let quad = create_quad_resources(&device, &shader_source, variant, format, &texture_view, &sampler);
        let debug_pipeline =
            debug.then(|| debug::create_debug_pipeline(&device, &quad.pipeline_layout, format));

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            quad,
            debug_pipeline,
            sampler,
            texture,
            texture_view,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            },
            disposed: false,
        })
    }

    /// Replace the placeholder with the loaded image.
    pub fn upload_image(&mut self, image: &web::HtmlImageElement, size: Size) {
        if self.disposed {
            return;
        }
        let max = self.device.limits().max_texture_dimension_2d;
        let width = (size.width as u32).clamp(1, max);
        let height = (size.height as u32).clamp(1, max);
        if width != size.width as u32 || height != size.height as u32 {
            log::warn!(
                "[texture] {}x{} exceeds device limit {}; cropping",
                size.width,
                size.height,
                max
            );
        }
        let (texture, view) = helpers::create_image_texture(&self.device, "image", width, height);
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.texture.destroy();
        self.texture = texture;
        self.texture_view = view;
        self.quad
            .rebuild_bind_group(&self.device, &self.texture_view, &self.sampler);
        log::info!("[texture] uploaded {}x{}", width, height);
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl Backend for GpuBackend {
    fn resize(&mut self, css: Size, pixel_ratio: f32) {
        if self.disposed {
            return;
        }
        let max = self.device.limits().max_texture_dimension_2d;
        let (width, height) = css.to_device_pixels(pixel_ratio);
        let (width, height) = (width.min(max), height.min(max));
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", css.width));
        _ = style.set_property("height", &format!("{}px", css.height));

        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    fn set_view(&mut self, fit: &CoverFit) {
        if self.disposed {
            return;
        }
        let view = ViewUniforms::from(fit);
        self.queue
            .write_buffer(&self.quad.view_buffer, 0, bytemuck::bytes_of(&view));
    }

    fn upload(&mut self, uniforms: &Uniforms<'_>) {
        if self.disposed {
            return;
        }
        self.queue
            .write_buffer(&self.quad.ripple_buffer, 0, uniforms.as_bytes());
    }

    fn draw(&mut self) -> Result<(), RippleError> {
        if self.disposed {
            return Ok(());
        }
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // skip this frame; the next one uses the fresh configuration
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(RippleError::Surface(e.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ripple_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ripple_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.quad.pipeline);
            rpass.set_bind_group(0, &self.quad.bind_group, &[]);
            rpass.draw(0..6, 0..1);

            if let Some(lines) = &self.debug_pipeline {
                rpass.set_pipeline(lines);
                rpass.draw(0..debug::LINE_VERTEX_COUNT, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.texture.destroy();
        self.quad.view_buffer.destroy();
        self.quad.ripple_buffer.destroy();
        self.device.destroy();
        log::debug!("[gpu] resources released");
    }
}
