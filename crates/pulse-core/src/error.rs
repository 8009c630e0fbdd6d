// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pulse feedback service.

use thiserror::Error;

/// The primary error type used across all Pulse crates.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Request validation errors (missing customer id or message). No state
    /// is mutated when this is returned.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Classification provider errors (API failure, malformed response).
    /// These never reach the HTTP surface: the classifier maps them to the
    /// neutral fallback classification.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PulseError {
    /// Shorthand for a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        PulseError::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = PulseError::validation("customer_id and message are required");
        assert_eq!(
            err.to_string(),
            "validation error: customer_id and message are required"
        );
    }

    #[test]
    fn storage_error_wraps_source() {
        let io = std::io::Error::other("disk gone");
        let err = PulseError::Storage {
            source: Box::new(io),
        };
        assert!(err.to_string().contains("disk gone"));
    }
}
