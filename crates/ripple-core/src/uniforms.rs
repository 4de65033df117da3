use crate::constants::{MAX_RIPPLES, START_TIME_VEC4S};
use crate::fit::CoverFit;

/// Camera bounds and quad scale, read by the vertex stage (and by the fragment
/// stage for aspect-correct ripple distances).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    /// left, right, top, bottom
    pub bounds: [f32; 4],
    pub scale: [f32; 2],
    pub _pad: [f32; 2],
}

impl From<&CoverFit> for ViewUniforms {
    fn from(fit: &CoverFit) -> Self {
        Self {
            bounds: fit.bounds.to_array(),
            scale: fit.scale.to_array(),
            _pad: [0.0; 2],
        }
    }
}

/// `RippleUniforms` in `ripple_continuous.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ContinuousUniforms {
    pub u_mouse: [f32; 2],
    pub u_time: f32,
    pub u_mouse_intensity: f32,
}

/// `RippleUniforms` in `ripple_discrete.wgsl`.
///
/// Uniform arrays need a 16-byte element stride: positions use the `xy` of
/// each vec4 and start times are packed four to a vec4.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiscreteUniforms {
    pub u_time: f32,
    pub _pad: [f32; 3],
    pub u_ripple_positions: [[f32; 4]; MAX_RIPPLES],
    pub u_ripple_start_times: [[f32; 4]; START_TIME_VEC4S],
}

impl DiscreteUniforms {
    pub fn set_slot(&mut self, index: usize, position: [f32; 2], start_time: f32) {
        if index >= MAX_RIPPLES {
            return;
        }
        self.u_ripple_positions[index] = [position[0], position[1], 0.0, 0.0];
        self.u_ripple_start_times[index / 4][index % 4] = start_time;
    }

    pub fn start_time(&self, index: usize) -> f32 {
        self.u_ripple_start_times[index / 4][index % 4]
    }
}

/// Per-variant uniform block handed to the backend. The discrete block is
/// borrowed from its model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Uniforms<'a> {
    Continuous(ContinuousUniforms),
    Discrete(&'a DiscreteUniforms),
}

impl Uniforms<'_> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Uniforms::Continuous(u) => bytemuck::bytes_of(u),
            Uniforms::Discrete(u) => bytemuck::bytes_of(*u),
        }
    }

    pub fn time(&self) -> f32 {
        match self {
            Uniforms::Continuous(u) => u.u_time,
            Uniforms::Discrete(u) => u.u_time,
        }
    }
}
