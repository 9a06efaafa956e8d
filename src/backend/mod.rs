//! Backend Module
//!
//! This module contains all server-side code. It provides one Axum HTTP
//! server that hosts the kdt sandbox, the ginipet account system and the
//! greenmarket marketplace side by side.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and startup
//! - **`routes`** - Router assembly
//! - **`auth`** - Credential gateway: accounts, password hashes, access tokens
//! - **`resources`** - Generic CRUD repository for the sandbox tables
//! - **`market`** - Greenmarket cart and product images
//! - **`middleware`** - Bearer-token verification
//! - **`error`** - `GatewayError` and its HTTP rendering
//! - **`response`** - `{ success: true }` bodies
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config loading, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Credential gateway
//! ├── resources/      - Generic resource repository and handlers
//! ├── market/         - Greenmarket cart and product images
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the SQLite pool and the credential gateway. Both are
//! cheap to clone and are handed to handlers through `State` extraction, so
//! nothing in the backend reaches for a process-wide handle.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, GatewayError>`. The error renders as a
//! JSON `{ "error": ... }` body with the status code of its category.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Shared success bodies
pub mod response;

/// Credential gateway and account management
pub mod auth;

/// Generic resource repository
pub mod resources;

/// Greenmarket cart and product images
pub mod market;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::GatewayError;
pub use auth::{CredentialGateway, Realm};
