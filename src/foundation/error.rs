/// Convenience result type used across giftransform.
pub type GifResult<T> = Result<T, GifError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Per-parameter setters never fail; only content and configuration loading does.
#[derive(thiserror::Error, Debug)]
pub enum GifError {
    /// Invalid user-provided dimensions, buffers or configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unrecognized color name or malformed color literal.
    #[error("color error: {0}")]
    Color(String),

    /// Errors while decoding GIF or still-image bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors when serializing or deserializing style configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifError {
    /// Build a [`GifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GifError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`GifError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GifError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
