/**
 * Gateway Error Types
 *
 * This module defines the error taxonomy shared by every handler.
 *
 * # Error Categories
 *
 * - `Conflict` - The identity (or cart entry) already exists
 * - `Unauthorized` - Bad credentials, or a missing/invalid/expired token
 * - `NotFound` - The addressed row does not exist
 * - `Validation` - A required field is missing or malformed
 * - Datastore, storage, hashing and signing failures render as 500
 *
 * Internal failures keep their source for logging but never expose it in
 * the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Message returned for every rejected bearer token
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Backend error type
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Duplicate identity or duplicate cart entry
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Credentials or token rejected
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Addressed resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Datastore failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Writing an uploaded file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl GatewayError {
    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// The single error used for unknown identities and wrong secrets
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS)
    }

    /// The single error used for any rejected bearer token
    pub fn invalid_token() -> Self {
        Self::unauthorized(INVALID_TOKEN)
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_)
            | Self::Storage(_)
            | Self::Hash(_)
            | Self::Token(_)
            | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error hides its cause from the client
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Database(_)
            | Self::Storage(_)
            | Self::Hash(_)
            | Self::Token(_)
            | Self::Task(_) => "Internal server error".to_string(),
        }
    }
}
