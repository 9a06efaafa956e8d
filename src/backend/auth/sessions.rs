/**
 * Access Tokens
 *
 * This module handles JWT generation and validation. Tokens are HS256,
 * carry the account ID, identity and realm, and expire one hour after
 * issue. They are never stored; validity is signature plus expiry.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::realm::Realm;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub id: i64,
    /// Identity string
    pub username: String,
    /// Realm the account belongs to
    pub realm: Realm,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies access tokens with one shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

impl TokenIssuer {
    /// Create an issuer from the HMAC secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a token for an account, valid from now
    pub fn issue(
        &self,
        id: i64,
        username: &str,
        realm: Realm,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(id, username, realm, now_secs())
    }

    /// Create a token as if issued at `issued_at`
    pub fn issue_at(
        &self,
        id: i64,
        username: &str,
        realm: Realm,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            id,
            username: username.to_string(),
            realm,
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let token = issuer.issue(7, "alice", Realm::Kdt).unwrap();
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.realm, Realm::Kdt);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = issuer();
        let two_hours_ago = now_secs() - 2 * TOKEN_TTL_SECS;
        let token = issuer.issue_at(7, "alice", Realm::Kdt, two_hours_ago).unwrap();

        let err = issuer.verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_token_near_expiry_still_valid() {
        let issuer = issuer();
        let issued = now_secs() - TOKEN_TTL_SECS + 60;
        let token = issuer.issue_at(1, "alice", Realm::Ginipet, issued).unwrap();
        assert!(issuer.verify(&token).is_ok());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issuer().issue(7, "alice", Realm::Kdt).unwrap();
        let other = TokenIssuer::new(b"another-secret");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(issuer().verify("invalid.token.here").is_err());
        assert!(issuer().verify("").is_err());
    }
}
