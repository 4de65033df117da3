pub mod clock;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod effect;
pub mod error;
pub mod fit;
pub mod impulses;
pub mod intensity;
pub mod interaction;
pub mod uniforms;
pub mod visibility;

pub use clock::Clock;
pub use config::{InvalidTimeStep, RippleConfig, TimeStep, UnknownVariant, Variant};
pub use debounce::Debounce;
pub use effect::{Backend, Listener, Phase, Platform, RippleEffect};
pub use error::RippleError;
pub use fit::{cover_fit, local_to_uv, CameraBounds, CoverFit, Size};
pub use impulses::{Impulse, ImpulseRing};
pub use intensity::PointerIntensity;
pub use interaction::{model_for, InteractionModel};
pub use uniforms::{ContinuousUniforms, DiscreteUniforms, Uniforms, ViewUniforms};
pub use visibility::{FallbackStyle, RenderPath, VisibilityGate};

// Shaders bundled as string constants
pub static QUAD_VERTEX_WGSL: &str = include_str!("../shaders/quad.wgsl");
pub static RIPPLE_CONTINUOUS_WGSL: &str = include_str!("../shaders/ripple_continuous.wgsl");
pub static RIPPLE_DISCRETE_WGSL: &str = include_str!("../shaders/ripple_discrete.wgsl");
pub static DEBUG_LINES_WGSL: &str = include_str!("../shaders/debug_lines.wgsl");

/// Full shader module source (shared vertex stage + variant fragment stage).
pub fn shader_source(variant: Variant) -> String {
    let fragment = match variant {
        Variant::Continuous => RIPPLE_CONTINUOUS_WGSL,
        Variant::Discrete => RIPPLE_DISCRETE_WGSL,
    };
    format!("{QUAD_VERTEX_WGSL}\n{fragment}")
}
