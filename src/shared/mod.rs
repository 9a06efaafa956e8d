//! Shared Module
//!
//! This module contains types that do not depend on the server stack:
//! gateway configuration and the validation errors produced while checking
//! request bodies. Keeping them here lets tooling and tests use them without
//! the `ssr` feature.

/// Shared error types
pub mod error;

/// Gateway configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{ConfigError, GatewayConfig, GatewayConfigBuilder};
