/**
 * Login Handler
 *
 * Handles POST on every realm's login route.
 *
 * # Authentication Process
 *
 * 1. Look up the account by identity
 * 2. Verify the secret against the bcrypt hash
 * 3. Record the login (greenmarket only)
 * 4. Return a one-hour JWT
 *
 * # Security
 *
 * - Unknown identity and wrong secret return the same 401 body
 * - Secrets are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Extension,
};

use crate::backend::auth::gateway::CredentialGateway;
use crate::backend::auth::handlers::types::{require_credentials, LoginRequest, TokenResponse};
use crate::backend::auth::realm::Realm;
use crate::backend::error::GatewayError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing identity/secret or unparseable body
/// * `401 Unauthorized` - Unknown identity or wrong secret
/// * `500 Internal Server Error` - Datastore, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(gateway): State<CredentialGateway>,
    Extension(realm): Extension<Realm>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, GatewayError> {
    let Json(request) = payload?;
    let (identity, secret) =
        require_credentials(realm, request.username.as_deref(), request.password.as_deref())?;

    tracing::info!("Login request in {} for: {}", realm, identity);

    let token = gateway.authenticate(realm, identity, secret).await?;
    Ok(Json(TokenResponse { token }))
}
