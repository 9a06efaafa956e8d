//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token verification for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use kdt_server::backend::auth::{get_me, CredentialGateway};
//! use kdt_server::backend::middleware::auth_middleware;
//!
//! fn protected(gateway: CredentialGateway) -> Router {
//!     Router::new()
//!         .route("/auth/me", get(get_me))
//!         .route_layer(from_fn_with_state(gateway, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
