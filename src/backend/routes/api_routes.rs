/**
 * API Route Handlers
 *
 * This module defines the account routes for every realm plus the small
 * ginipet and identity endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /register`, `POST /login` - kdt accounts
 * - `POST /register2`, `POST /login2` - kdt accounts with email and tel
 * - `POST /ginipet/register`, `POST /ginipet/login` - ginipet accounts
 * - `POST /greenmarket/register`, `POST /greenmarket/login` - greenmarket accounts
 * - `GET /auth/me` - Decoded identity of the caller (requires a token)
 *
 * ## Ginipet
 * - `GET /ginipet/join` - Fixed greeting
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::backend::auth::{get_me, login, register, Realm};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

const GINIPET_GREETING: &str = "Excused from ginipet backend";

/// Registration and login for one realm
///
/// The realm travels to the shared handlers as a request extension.
fn realm_routes(realm: Realm) -> Router<AppState> {
    Router::new()
        .route(realm.register_path(), post(register))
        .route(realm.login_path(), post(login))
        .layer(Extension(realm))
}

async fn ginipet_join() -> Json<&'static str> {
    Json(GINIPET_GREETING)
}

/// Configure API routes
///
/// # Authentication
///
/// `/auth/me` requires a JWT in the `Authorization` header; every other
/// route here is public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let router = Realm::ALL
        .into_iter()
        .fold(router, |router, realm| router.merge(realm_routes(realm)));

    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route_layer(from_fn_with_state(app_state.gateway.clone(), auth_middleware));

    router
        .route("/ginipet/join", get(ginipet_join))
        .merge(protected)
}
