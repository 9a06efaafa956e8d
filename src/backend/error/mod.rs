//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Error Categories
//!
//! | variant        | status |
//! |----------------|--------|
//! | `Conflict`     | 400    |
//! | `Validation`   | 400    |
//! | `Unauthorized` | 401    |
//! | `NotFound`     | 404    |
//! | `Internal`     | 500    |
//!
//! Datastore, hashing, token and task-join failures convert into the
//! internal category through `#[from]` so handlers can use `?` freely.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::GatewayError;
