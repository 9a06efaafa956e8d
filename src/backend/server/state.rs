/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The SQLite pool used by the resource and cart handlers
 * - The credential gateway used by the auth handlers and middleware
 * - The image store used by product uploads
 *
 * All three are cheap clones around shared handles, so no `Arc`/`RwLock`
 * wrapping is needed.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // query with pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::gateway::CredentialGateway;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::market::images::ImageStore;

/// Application state shared by every route
#[derive(Clone)]
pub struct AppState {
    /// Datastore handle
    pub db_pool: SqlitePool,

    /// Credential gateway (shares the same pool)
    pub gateway: CredentialGateway,

    /// Upload directory for product images
    pub images: ImageStore,
}

impl AppState {
    /// Build state around an open pool, the token signing secret and the
    /// image directory
    pub fn new(db_pool: SqlitePool, jwt_secret: &str, images: ImageStore) -> Self {
        let gateway = CredentialGateway::new(db_pool.clone(), TokenIssuer::new(jwt_secret.as_bytes()));
        Self {
            db_pool,
            gateway,
            images,
        }
    }
}

/// Lets handlers extract `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets handlers extract `State<ImageStore>` directly
impl FromRef<AppState> for ImageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.images.clone()
    }
}

/// Lets handlers extract `State<CredentialGateway>` directly
impl FromRef<AppState> for CredentialGateway {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.clone()
    }
}
