//! Authentication Module
//!
//! This module is the credential gateway: it registers accounts, verifies
//! username/password pairs against bcrypt hashes and issues one-hour JWT
//! access tokens that protected routes check.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── realm.rs        - The account tables served by the gateway
//! ├── accounts.rs     - Account rows and database operations
//! ├── sessions.rs     - JWT issue and verification
//! ├── gateway.rs      - Register / authenticate / verify
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration handler
//!     ├── login.rs    - Login handler
//!     └── me.rs       - Current identity handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: identity + secret (+ profile) → account row → `{ success: true }`
//! 2. **Login**: identity + secret → hash verified → `{ token }`
//! 3. **Protected routes**: `Authorization: Bearer <token>` → claims attached to the request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens expire after 1 hour and are never stored
//! - Invalid credentials return 401 with one message (no information leakage)

/// Account realms
pub mod realm;

/// Account data model and database operations
pub mod accounts;

/// JWT token generation and validation
pub mod sessions;

/// Credential gateway
pub mod gateway;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use realm::Realm;
pub use gateway::CredentialGateway;
pub use sessions::{Claims, TokenIssuer};
pub use handlers::{register, login, get_me};
