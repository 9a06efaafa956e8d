/**
 * Get Current User Handler
 *
 * Implements GET /auth/me, which echoes the identity decoded from the
 * caller's access token. The route sits behind `auth_middleware`, so by
 * the time this runs the token has already been verified.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing, malformed or expired token (raised by the middleware)
///
/// # Example Response
///
/// ```json
/// { "id": 1, "username": "alice", "realm": "kdt" }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.id,
        username: user.username,
        realm: user.realm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::realm::Realm;
    use crate::backend::middleware::AuthenticatedUser;

    #[tokio::test]
    async fn test_get_me_echoes_identity() {
        let user = AuthenticatedUser {
            id: 3,
            username: "carol".to_string(),
            realm: Realm::Greenmarket,
        };

        let Json(response) = get_me(AuthUser(user)).await;
        assert_eq!(
            response,
            MeResponse {
                id: 3,
                username: "carol".to_string(),
                realm: Realm::Greenmarket,
            }
        );
    }
}
