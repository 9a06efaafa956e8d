//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. The realm a handler
//! serves is supplied by an `Extension<Realm>` layer on its route, so one
//! handler covers every account table.
//!
//! # Handlers
//!
//! - **`register`** - POST /register, /register2, /ginipet/register, /greenmarket/register
//! - **`login`** - POST /login, /login2, /ginipet/login, /greenmarket/login
//! - **`get_me`** - GET /auth/me (requires a bearer token)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::post, Extension, Router};
//! use kdt_server::backend::auth::{login, register, Realm};
//! use kdt_server::backend::server::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/ginipet/register", post(register))
//!     .route("/ginipet/login", post(login))
//!     .layer(Extension(Realm::Ginipet));
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current identity handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, MeResponse, RegisterRequest, TokenResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
pub use me::get_me;
