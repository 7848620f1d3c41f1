//! Error types for OpenForms

use thiserror::Error;

/// OpenForms error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormsError {
    /// Missing or empty required input
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced id does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// List index outside `0..len`
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Underlying persistence failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl FormsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Stable machine-readable code, used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Result type for OpenForms
pub type Result<T> = std::result::Result<T, FormsError>;
