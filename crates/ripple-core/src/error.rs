use crate::effect::Phase;

#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    #[error("texture image failed to load: {url}")]
    TextureLoad { url: String },

    #[error("shading backend unavailable: {0}")]
    Backend(String),

    #[error("mount container is missing")]
    MissingContainer,

    #[error("effect is {found:?}, expected {expected:?}")]
    InvalidPhase { expected: Phase, found: Phase },

    #[error("surface error: {0}")]
    Surface(String),

    #[error("js error: {0}")]
    Js(String),
}

impl RippleError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RippleError::Surface(_))
    }
}
