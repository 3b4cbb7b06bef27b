/// Convenience result type used across toonduck.
pub type ToonResult<T> = Result<T, ToonError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ToonError {
    /// Missing, corrupt or oversized source image.
    #[error("input error: {0}")]
    Input(String),

    /// Frame sequences the encoder cannot accept.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid configuration or request values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures inside the rasterizer adapter.
    #[error("render error: {0}")]
    Render(String),

    /// Decoder/encoder errors from the `image` crate, passed through unchanged.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error, usually IO with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToonError {
    /// Build a [`ToonError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`ToonError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`ToonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ToonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
