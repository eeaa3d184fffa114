/// Convenience result type used across strokeplay.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy used by the public API.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Invalid caller-provided configuration, indices or documents.
    #[error("validation error: {0}")]
    Validation(String),

    /// Path data that cannot be measured or placed.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
