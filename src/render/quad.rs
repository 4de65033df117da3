use super::helpers;
use ripple_core::{ContinuousUniforms, DiscreteUniforms, Variant, ViewUniforms};

/// Textured quad drawn with the variant's ripple shader.
///
/// Bind group 0: `view` uniforms (binding 0), ripple uniforms (binding 1),
/// image texture (binding 2) and sampler (binding 3).
pub(crate) struct QuadResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) pipeline_layout: wgpu::PipelineLayout,
    pub(crate) bind_group_layout: wgpu::BindGroupLayout,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) view_buffer: wgpu::Buffer,
    pub(crate) ripple_buffer: wgpu::Buffer,
}

pub(crate) fn ripple_uniform_size(variant: Variant) -> u64 {
    match variant {
        Variant::Continuous => std::mem::size_of::<ContinuousUniforms>() as u64,
        Variant::Discrete => std::mem::size_of::<DiscreteUniforms>() as u64,
    }
}

pub(crate) fn create_quad_resources(
    device: &wgpu::Device,
    shader_source: &str,
    variant: Variant,
    surface_format: wgpu::TextureFormat,
    texture_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> QuadResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("ripple_shader"),
        source: wgpu::ShaderSource::Wgsl(shader_source.into()),
    });
    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ripple_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            helpers::uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ripple_pl"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("ripple_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_quad"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_ripple"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let view_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("view_uniforms"),
        size: std::mem::size_of::<ViewUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let ripple_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ripple_uniforms"),
        size: ripple_uniform_size(variant),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = create_bind_group(
        device,
        &bind_group_layout,
        &view_buffer,
        &ripple_buffer,
        texture_view,
        sampler,
    );

    QuadResources {
        pipeline,
        pipeline_layout,
        bind_group_layout,
        bind_group,
        view_buffer,
        ripple_buffer,
    }
}

impl QuadResources {
    pub(crate) fn rebuild_bind_group(
        &mut self,
        device: &wgpu::Device,
        texture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) {
        self.bind_group = create_bind_group(
            device,
            &self.bind_group_layout,
            &self.view_buffer,
            &self.ripple_buffer,
            texture_view,
            sampler,
        );
    }
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view_buffer: &wgpu::Buffer,
    ripple_buffer: &wgpu::Buffer,
    texture_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ripple_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: ripple_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(texture_view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
