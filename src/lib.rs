//! kdt-server - Main Library
//!
//! kdt-server hosts several small demo backends behind a single HTTP
//! listener: the kdt CRUD sandbox (goods, books, fruits, questions), the
//! ginipet account system and the greenmarket marketplace with its cart and
//! product images.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server stack
//!   - Gateway configuration and its builder
//!   - Validation error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, application state and startup
//!   - Credential gateway (bcrypt hashes, JWT access tokens)
//!   - Generic resource repository and handlers
//!   - Greenmarket cart and product image upload
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use kdt_server::backend::server::init::create_app;
//! use kdt_server::shared::GatewayConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for request validation failures
//! - `backend::error::GatewayError` for everything a handler can return;
//!   it renders as `{ "error": "..." }` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
