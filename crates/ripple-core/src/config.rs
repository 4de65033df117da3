use crate::constants::{FIXED_TIME_STEP, RESIZE_DEBOUNCE_MS};
use std::fmt;
use std::str::FromStr;

/// Which interaction model drives the shader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Single pointer position plus a decaying intensity scalar.
    #[default]
    Continuous,
    /// Bounded log of timestamped ripple impulses.
    Discrete,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Continuous => "continuous",
            Variant::Discrete => "discrete",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown ripple variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "continuous" | "intensity" => Ok(Variant::Continuous),
            "discrete" | "impulses" | "multi" => Ok(Variant::Discrete),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// How shader time advances between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStep {
    /// Constant step per animation frame. Animation speed follows the display
    /// refresh rate.
    Fixed(f32),
    /// `rate` shader-time units per wall-clock second.
    PerSecond(f32),
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::Fixed(FIXED_TIME_STEP)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTimeStep(pub String);

impl fmt::Display for InvalidTimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time step `{}`: expected `fixed` or a positive rate", self.0)
    }
}

impl std::error::Error for InvalidTimeStep {}

impl TimeStep {
    /// Wall-clock rate in shader-time units per second.
    pub fn per_second(rate: f32) -> Result<Self, InvalidTimeStep> {
        if rate.is_finite() && rate > 0.0 {
            Ok(TimeStep::PerSecond(rate))
        } else {
            Err(InvalidTimeStep(rate.to_string()))
        }
    }
}

/// `fixed` (or empty) for the per-frame default, otherwise a per-second rate.
impl FromStr for TimeStep {
    type Err = InvalidTimeStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "fixed" | "frame" => Ok(TimeStep::default()),
            other => other
                .parse::<f32>()
                .map_err(|_| InvalidTimeStep(other.to_string()))
                .and_then(TimeStep::per_second),
        }
    }
}

/// Per-instance configuration, immutable once the effect is constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    pub image_url: String,
    pub variant: Variant,
    /// Draw the camera projection outline and log resize results.
    pub debug: bool,
    pub resize_debounce_ms: u32,
    pub time_step: TimeStep,
}

impl RippleConfig {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            variant: Variant::default(),
            debug: false,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            time_step: TimeStep::default(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_resize_debounce_ms(mut self, ms: u32) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    pub fn with_time_step(mut self, time_step: TimeStep) -> Self {
        self.time_step = time_step;
        self
    }

    /// Level for per-resize diagnostics: visible at the console's default
    /// `Info` filter in debug mode.
    pub fn diagnostics_level(&self) -> log::Level {
        if self.debug {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}
