/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the datastore and run migrations
 * 2. Create the credential gateway from the signing secret and the image
 *    store from the upload directory
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::market::images::ImageStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, StartupError};
use crate::backend::server::state::AppState;
use crate::shared::config::GatewayConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` if the configuration is invalid or the datastore
/// cannot be opened or migrated.
pub async fn create_app(config: &GatewayConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing kdt backend server");
    config.validate()?;

    let db_pool = load_database(config).await?;
    let images = ImageStore::new(config.upload_dir.clone());
    let app_state = AppState::new(db_pool, &config.jwt_secret, images);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
