//! Error Types for Conference Core
//!
//! Simplified error handling with the main error types needed for conference
//! management. Leg operations surface these; the conference itself never
//! propagates them to its host (see [`crate::conference::manager`]).

use thiserror::Error;

/// Main result type for conference operations
pub type Result<T> = std::result::Result<T, ConferenceError>;

/// Main error type for conference operations
#[derive(Debug, Clone, Error)]
pub enum ConferenceError {
    /// The underlying call rejected the request because of its current
    /// signaling state (e.g., hangup on an already-terminated call)
    #[error("Invalid call state: {0}")]
    InvalidCallState(String),

    /// A delegated leg operation failed
    #[error("Leg operation '{operation}' failed: {message}")]
    LegOperation {
        /// Name of the operation that was requested
        operation: String,
        /// Why the leg rejected it
        message: String,
    },

    /// Invalid conference state for the requested operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for ConferenceError {
    fn from(msg: String) -> Self {
        ConferenceError::Other(msg)
    }
}

impl From<&str> for ConferenceError {
    fn from(msg: &str) -> Self {
        ConferenceError::Other(msg.to_string())
    }
}

// Convenience constructors
impl ConferenceError {
    pub fn invalid_call_state(msg: &str) -> Self {
        ConferenceError::InvalidCallState(msg.to_string())
    }

    pub fn leg_operation(operation: &str, message: &str) -> Self {
        ConferenceError::LegOperation {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_state(msg: &str) -> Self {
        ConferenceError::InvalidState(msg.to_string())
    }
}
