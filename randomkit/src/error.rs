//! Error types for the random engine
//!
//! Every failure is detected before any draw is consumed, so an `Err`
//! always leaves the engine state untouched.

use thiserror::Error;

/// Errors that can occur when sampling or restoring engine state
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RandomError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        RandomError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RandomError {
    fn from(err: serde_json::Error) -> Self {
        RandomError::Serialization(err.to_string())
    }
}
