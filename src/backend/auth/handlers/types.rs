/**
 * Authentication Handler Types
 *
 * Request and response bodies for the authentication endpoints. The
 * identity is accepted as `username`, `userid` or `identity` and the
 * secret as `password` or `secret`, since the hosted front ends disagree.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::accounts::Profile;
use crate::backend::auth::realm::Realm;
use crate::shared::error::{require_text, SharedError};

/// Pull a non-blank identity and a non-empty secret out of a request.
/// The secret is used verbatim; only the identity is trimmed.
pub(crate) fn require_credentials<'a>(
    realm: Realm,
    identity: Option<&'a str>,
    secret: Option<&'a str>,
) -> Result<(&'a str, &'a str), SharedError> {
    let identity = require_text(realm.identity_column(), identity)?;
    let secret = secret
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SharedError::missing("password"))?;
    Ok((identity, secret))
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Identity (username or userid)
    #[serde(default, alias = "userid", alias = "identity")]
    pub username: Option<String>,
    /// Secret (will be hashed before storage)
    #[serde(default, alias = "secret")]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "tel")]
    pub phone: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl RegisterRequest {
    /// Profile fields carried by this request
    pub fn profile(&self) -> Profile {
        Profile {
            email: self.email.clone(),
            phone: self.phone.clone(),
            region: self.region.clone(),
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// Identity (username or userid)
    #[serde(default, alias = "userid", alias = "identity")]
    pub username: Option<String>,
    /// Secret (verified against the stored hash)
    #[serde(default, alias = "secret")]
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT access token (1-hour expiration)
    pub token: String,
}

/// Decoded identity of the caller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub realm: Realm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_aliases() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "userid": "carol",
            "password": "pw",
            "tel": "010-0000-0000",
            "region": "Seoul"
        }))
        .unwrap();
        assert_eq!(request.username.as_deref(), Some("carol"));
        assert_eq!(request.profile().phone.as_deref(), Some("010-0000-0000"));
        assert_eq!(request.profile().region.as_deref(), Some("Seoul"));
    }

    #[test]
    fn test_login_request_accepts_identity_and_secret() {
        let request: LoginRequest = serde_json::from_value(serde_json::json!({
            "identity": "alice",
            "secret": "pw123"
        }))
        .unwrap();
        assert_eq!(request.username.as_deref(), Some("alice"));
        assert_eq!(request.password.as_deref(), Some("pw123"));
    }

    #[test]
    fn test_require_credentials() {
        assert_eq!(
            require_credentials(Realm::Kdt, Some(" alice "), Some(" pw ")),
            Ok(("alice", " pw "))
        );
        assert_eq!(
            require_credentials(Realm::Greenmarket, None, Some("pw")),
            Err(SharedError::missing("userid"))
        );
        assert_eq!(
            require_credentials(Realm::Kdt, Some("alice"), Some("")),
            Err(SharedError::missing("password"))
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.username.is_none());
        assert!(request.password.is_none());
    }
}
