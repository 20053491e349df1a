/// Convenience result type used across the crate.
pub type SpiroResult<T> = Result<T, SpiroError>;

/// Top-level error taxonomy used by curve, animation and export APIs.
///
/// Numeric parameters are coerced rather than rejected, so most of these variants only surface
/// from export paths.
#[derive(thiserror::Error, Debug)]
pub enum SpiroError {
    /// Invalid caller-provided configuration that cannot be coerced (sizes, frame rates, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// Misuse of the animation clock or timeline.
    #[error("animation error: {0}")]
    Animation(String),

    /// The raster surface for an export could not be created.
    #[error("render surface error: {0}")]
    Surface(String),

    /// A format encoder failed while assembling output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpiroError {
    /// Build a [`SpiroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpiroError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SpiroError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`SpiroError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SpiroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
