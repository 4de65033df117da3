use crate::config::Variant;
use crate::impulses::ImpulseRing;
use crate::intensity::PointerIntensity;
use crate::uniforms::Uniforms;
use glam::Vec2;

/// Pointer-driven state feeding the ripple shader.
///
/// The effect owns exactly one model and forwards pointer moves and frame
/// ticks to it; the model decides what those mean for its uniforms.
pub trait InteractionModel {
    fn variant(&self) -> Variant;

    /// Pointer moved to `uv` while shader time was `elapsed`.
    fn pointer_moved(&mut self, uv: Vec2, elapsed: f32);

    /// One visible animation frame has passed.
    fn advance(&mut self);

    /// Uniform block for the current state, stamped with `elapsed`.
    fn uniforms(&mut self, elapsed: f32) -> Uniforms<'_>;

    /// Whether uniforms should be uploaded right after each pointer move
    /// instead of only once per frame.
    fn uploads_on_pointer(&self) -> bool {
        false
    }
}

pub fn model_for(variant: Variant) -> Box<dyn InteractionModel> {
    match variant {
        Variant::Continuous => Box::new(PointerIntensity::default()),
        Variant::Discrete => Box::new(ImpulseRing::default()),
    }
}
