/// Convenience result type used across Gifsheet.
pub type GifsheetResult<T> = Result<T, GifsheetError>;

/// Top-level error taxonomy used by engine APIs.
///
/// No variant is retried or silently recovered from; each failure is surfaced
/// to the caller as-is and no partial result is produced alongside it.
#[derive(thiserror::Error, Debug)]
pub enum GifsheetError {
    /// Zero frames were handed to the layout engine.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// The source animation could not be decoded; reported upward unchanged.
    #[error("decode error: {0}")]
    Decode(String),

    /// A drawable raster surface could not be produced (canvas allocation,
    /// dimension overflow, or raster encode failure).
    #[error("render surface error: {0}")]
    RenderSurface(String),

    /// Invalid user-provided frame or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifsheetError {
    /// Build a [`GifsheetError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`GifsheetError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GifsheetError::RenderSurface`] value.
    pub fn render_surface(msg: impl Into<String>) -> Self {
        Self::RenderSurface(msg.into())
    }

    /// Build a [`GifsheetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GifsheetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
