//! Shared Error Types
//!
//! This module defines the validation errors raised while checking request
//! bodies. The backend converts them into `GatewayError::Validation`, which
//! renders as a `400 Bad Request` with a JSON `error` message.
//!
//! # Usage
//!
//! ```rust
//! use kdt_server::shared::error::{require_text, SharedError};
//!
//! let name = Some("  ".to_string());
//! let error = require_text("name", name.as_deref()).unwrap_err();
//! assert!(matches!(error, SharedError::MissingField { .. }));
//! ```
use thiserror::Error;

/// Errors that can occur while validating request data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was absent or blank
    #[error("Missing required field: {field}")]
    MissingField {
        /// The field that was missing
        field: String,
    },

    /// A field was present but had an unacceptable value
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Require a non-blank text value, returning it trimmed
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(SharedError::missing(field)),
    }
}

/// Require that an optional value is present
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, SharedError> {
    value.ok_or_else(|| SharedError::missing(field))
}
