use crate::config::Variant;
use crate::constants::{INTENSITY_DECAY, INTENSITY_GAIN, INTENSITY_MAX, INTENSITY_SNAP, OFFSCREEN_UV};
use crate::interaction::InteractionModel;
use crate::uniforms::{ContinuousUniforms, Uniforms};
use glam::Vec2;

/// Continuous model: the latest pointer position and a decaying "energy"
/// scalar fed by pointer speed.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerIntensity {
    pointer: Vec2,
    previous: Vec2,
    speed: f32,
    intensity: f32,
}

impl Default for PointerIntensity {
    fn default() -> Self {
        let off = Vec2::from_array(OFFSCREEN_UV);
        Self {
            pointer: off,
            previous: off,
            speed: 0.0,
            intensity: 0.0,
        }
    }
}

impl PointerIntensity {
    /// Start from a given intensity (clamped into `[0, 1]`).
    pub fn with_intensity(intensity: f32) -> Self {
        Self {
            intensity: intensity.clamp(0.0, INTENSITY_MAX),
            ..Self::default()
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

impl InteractionModel for PointerIntensity {
    fn variant(&self) -> Variant {
        Variant::Continuous
    }

    fn pointer_moved(&mut self, uv: Vec2, _elapsed: f32) {
        self.pointer = uv;
    }

    fn advance(&mut self) {
        self.speed = self.pointer.distance(self.previous);
        self.intensity = (self.intensity + self.speed * INTENSITY_GAIN).min(INTENSITY_MAX);

        if self.intensity > 0.0 {
            self.intensity *= INTENSITY_DECAY;
            if self.intensity < INTENSITY_SNAP {
                self.intensity = 0.0;
            }
        }

        self.previous = self.pointer;
    }

    fn uniforms(&mut self, elapsed: f32) -> Uniforms<'_> {
        Uniforms::Continuous(ContinuousUniforms {
            u_mouse: self.pointer.to_array(),
            u_time: elapsed,
            u_mouse_intensity: self.intensity,
        })
    }
}
