//! Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Payload did not match the expected shape
    #[error("Unexpected payload: expected {expected}, got {found}")]
    UnexpectedShape {
        /// JSON kind the decoder needed
        expected: &'static str,
        /// JSON kind actually received
        found: &'static str,
    },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// Create an unexpected shape error
    pub fn unexpected_shape(expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedShape { expected, found }
    }
}
