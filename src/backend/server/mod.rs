//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Datastore connection and migrations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database loading and StartupError
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `GatewayConfig` is validated
//! 2. **Datastore**: The SQLite pool is opened and migrated
//! 3. **State Creation**: Pool and credential gateway go into `AppState`
//! 4. **Router Creation**: All routes and layers are configured
//!
//! # Example
//!
//! ```rust,no_run
//! use kdt_server::backend::server::create_app;
//! use kdt_server::shared::GatewayConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&GatewayConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Datastore loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::StartupError;
pub use init::create_app;
