/**
 * Credential Gateway
 *
 * Register, authenticate and token verification in one place. Handlers and
 * middleware only translate HTTP to these calls.
 *
 * # Security
 *
 * - Secrets are hashed with bcrypt at a fixed cost; hashing and comparison
 *   run on the blocking pool
 * - Unknown identity and wrong secret produce the same `Unauthorized` error
 * - Duplicate identities are caught by the table's unique constraint, so a
 *   rejected registration never writes anything
 */

use sqlx::SqlitePool;

use crate::backend::auth::accounts::{self, Profile};
use crate::backend::auth::realm::Realm;
use crate::backend::auth::sessions::{Claims, TokenIssuer};
use crate::backend::error::GatewayError;

/// bcrypt work factor for stored secrets
pub const HASH_COST: u32 = 10;

/// Verifies credentials against the account tables and issues tokens
#[derive(Clone)]
pub struct CredentialGateway {
    pool: SqlitePool,
    tokens: TokenIssuer,
}

impl CredentialGateway {
    pub fn new(pool: SqlitePool, tokens: TokenIssuer) -> Self {
        Self { pool, tokens }
    }

    /// Create an account, returning its ID
    ///
    /// # Errors
    ///
    /// * `Conflict` - The identity already exists in this realm
    /// * `Internal` - Hashing or datastore failure
    pub async fn register(
        &self,
        realm: Realm,
        identity: &str,
        secret: &str,
        profile: &Profile,
    ) -> Result<i64, GatewayError> {
        let password_hash = hash_secret(secret).await?;

        match accounts::create_account(&self.pool, realm, identity, &password_hash, profile).await {
            Ok(id) => {
                tracing::info!("Account created in {}: {} (id {})", realm, identity, id);
                Ok(id)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!("Identity already exists in {}: {}", realm, identity);
                Err(GatewayError::conflict("Username already exists"))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials and mint an access token
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - Unknown identity or wrong secret (same message)
    /// * `Internal` - Datastore, hashing or signing failure
    pub async fn authenticate(
        &self,
        realm: Realm,
        identity: &str,
        secret: &str,
    ) -> Result<String, GatewayError> {
        let account = match accounts::find_account(&self.pool, realm, identity).await? {
            Some(account) => account,
            None => {
                tracing::warn!("Login for unknown identity in {}: {}", realm, identity);
                return Err(GatewayError::invalid_credentials());
            }
        };

        if !verify_secret(secret, &account.password_hash).await? {
            tracing::warn!("Wrong secret for {} in {}", identity, realm);
            return Err(GatewayError::invalid_credentials());
        }

        accounts::record_login(&self.pool, realm, account.id).await?;

        let token = self.tokens.issue(account.id, &account.identity, realm)?;
        tracing::info!("Login succeeded in {}: {}", realm, account.identity);
        Ok(token)
    }

    /// Check a bearer token's signature and expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims, GatewayError> {
        self.tokens.verify(token).map_err(|e| {
            tracing::warn!("Rejected token: {}", e);
            GatewayError::invalid_token()
        })
    }
}

async fn hash_secret(secret: &str) -> Result<String, GatewayError> {
    let secret = secret.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(secret, HASH_COST)).await??;
    Ok(hash)
}

async fn verify_secret(secret: &str, password_hash: &str) -> Result<bool, GatewayError> {
    let secret = secret.to_owned();
    let password_hash = password_hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(secret, &password_hash)).await??;
    Ok(valid)
}
