/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (realm registration/login, `/auth/me`)
 * 2. Resource routes (goods, books, fruits, questions, products)
 * 3. Market routes (greenmarket cart, product images)
 * 4. Stored images under `/uploads`
 * 5. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * Every route is wrapped in request tracing and a permissive CORS policy,
 * so any front-end origin may call the API.
 */

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::error::GatewayError;
use crate::backend::market::UPLOAD_ROUTE;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::market_routes::configure_market_routes;
use crate::backend::routes::resource_routes::configure_resource_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Datastore pool, credential gateway and image store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(Router::new(), &app_state);
    let router = configure_resource_routes(router);
    let router = configure_market_routes(router, &app_state);
    let router = router.nest_service(UPLOAD_ROUTE, ServeDir::new(app_state.images.dir()));

    router
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}

/// Any origin, with the methods and headers the front ends send
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

async fn route_not_found() -> GatewayError {
    GatewayError::not_found("Route not found")
}
