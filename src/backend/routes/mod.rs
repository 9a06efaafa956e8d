//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs              - Module exports and documentation
//! ├── router.rs           - Main router creation, CORS and tracing layers
//! ├── api_routes.rs       - Realm registration/login, /auth/me, /ginipet/join
//! ├── resource_routes.rs  - Generic CRUD mounts
//! └── market_routes.rs    - Greenmarket cart (token protected), product images
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use kdt_server::backend::routes::create_router;
//! use kdt_server::backend::market::ImageStore;
//! use kdt_server::backend::server::{config::connect_database, AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = connect_database("sqlite::memory:").await?;
//! let router = create_router(AppState::new(pool, "secret", ImageStore::new("uploads")));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Account and identity routes
pub mod api_routes;

/// Generic resource routes
pub mod resource_routes;

/// Greenmarket cart routes
pub mod market_routes;

pub use router::create_router;
