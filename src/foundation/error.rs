/// Crate-wide result alias.
pub type HTextResult<T> = Result<T, HTextError>;

/// Error type returned by fallible configuration, measurement and layout calls.
///
/// The host-facing engine API never surfaces these: it logs them and degrades to a safe
/// fallback (zero offset, zero widths) so invariants keep holding.
#[derive(thiserror::Error, Debug)]
pub enum HTextError {
    /// Invalid configuration or input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Glyph measurement backend failure.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// Host layout could not be queried.
    #[error("layout error: {0}")]
    Layout(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HTextError {
    /// Build a [`HTextError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HTextError::Measurement`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`HTextError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`HTextError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
