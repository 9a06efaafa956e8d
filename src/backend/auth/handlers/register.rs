/**
 * Register Handler
 *
 * Handles POST on every realm's registration route.
 *
 * # Registration Process
 *
 * 1. Require a non-blank identity and a non-empty secret
 * 2. Hash the secret with bcrypt
 * 3. Insert the account with its profile fields
 * 4. Return `{ "success": true }`
 *
 * A duplicate identity is reported as 400 with an `error` message; the
 * unique constraint rejects the insert, so nothing is written.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Extension,
};

use crate::backend::auth::gateway::CredentialGateway;
use crate::backend::auth::handlers::types::{require_credentials, RegisterRequest};
use crate::backend::auth::realm::Realm;
use crate::backend::error::GatewayError;
use crate::backend::response::SuccessResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing identity/secret, unparseable body, or identity taken
/// * `500 Internal Server Error` - Hashing or datastore failure
///
/// # Example Request
///
/// ```http
/// POST /ginipet/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw123", "tel": "010-1234-5678", "email": "alice@example.com" }
/// ```
pub async fn register(
    State(gateway): State<CredentialGateway>,
    Extension(realm): Extension<Realm>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    let Json(request) = payload?;
    let (identity, secret) =
        require_credentials(realm, request.username.as_deref(), request.password.as_deref())?;

    tracing::info!("Register request in {} for: {}", realm, identity);

    gateway
        .register(realm, identity, secret, &request.profile())
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
