/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require a
 * signed access token. It extracts the bearer token from the Authorization
 * header, verifies it through the credential gateway and attaches the
 * decoded identity to the request.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::gateway::CredentialGateway;
use crate::backend::auth::realm::Realm;
use crate::backend::auth::sessions::Claims;
use crate::backend::error::GatewayError;

/// Authenticated user data decoded from the access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub realm: Realm,
}

impl AuthenticatedUser {
    /// Reject tokens issued by another realm
    pub fn require_realm(&self, realm: Realm) -> Result<(), GatewayError> {
        if self.realm == realm {
            Ok(())
        } else {
            tracing::warn!(
                "Token for {} presented to a {} route by: {}",
                self.realm,
                realm,
                self.username
            );
            Err(GatewayError::invalid_token())
        }
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            realm: claims.realm,
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, GatewayError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            GatewayError::unauthorized("Missing token")
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            GatewayError::unauthorized("Missing token")
        })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(gateway): State<CredentialGateway>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let claims = gateway.verify_token(bearer_token(request.headers())?)?;
    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                GatewayError::unauthorized("Missing token")
            })?;

        Ok(AuthUser(user))
    }
}
