// Tuning constants for the ripple effect. Shared by both interaction models and
// the web frontend.

// Continuous intensity model
pub const INTENSITY_GAIN: f32 = 0.5; // intensity added per unit of pointer travel (uv units)
pub const INTENSITY_MAX: f32 = 1.0;
pub const INTENSITY_DECAY: f32 = 0.95; // multiplicative decay applied every frame
pub const INTENSITY_SNAP: f32 = 0.01; // below this the intensity snaps to exactly zero

// Time
pub const FIXED_TIME_STEP: f32 = 0.05; // shader time advanced per animation frame
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for wall-clock steps after tab suspension

// Discrete impulse model
pub const MAX_RIPPLES: usize = 50;
// `u_ripple_start_times` packs four floats per vec4 to satisfy the uniform array stride
pub const START_TIME_VEC4S: usize = MAX_RIPPLES.div_ceil(4);

// Off-surface sentinel for pointer and empty impulse slots
pub const OFFSCREEN_UV: [f32; 2] = [-10.0, -10.0];

// Window resize handling
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Visibility observer thresholds: fully out, fully in
pub const VISIBILITY_THRESHOLDS: [f64; 2] = [0.0, 1.0];
