/// Convenience result type used across doorscroll.
pub type DoorResult<T> = Result<T, DoorError>;

/// Top-level error taxonomy used by library APIs.
///
/// Conditions the render loop treats as "not ready yet" (missing frame,
/// missing video frame, out-of-range progress) are never reported through
/// this type.
#[derive(thiserror::Error, Debug)]
pub enum DoorError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or decoding image assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while writing into a pixel buffer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoorError {
    /// Build a [`DoorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DoorError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DoorError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DoorError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
