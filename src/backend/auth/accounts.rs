/**
 * Account Model and Database Operations
 *
 * This module handles account rows for every realm. Table and column names
 * come from `Realm`, which only ever yields compile-time constants, so the
 * statements are assembled with `format!` while all values are bound.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::auth::realm::{ProfileField, Realm};

/// Account row as needed for authentication
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Durable account ID
    pub id: i64,
    /// Identity string (username or userid, depending on the realm)
    pub identity: String,
    /// bcrypt hash of the secret
    pub password_hash: String,
}

/// Optional profile fields supplied at registration
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
}

impl Profile {
    fn value(&self, field: ProfileField) -> Option<String> {
        let value = match field {
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Region => &self.region,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
    }
}

/// Insert a new account
///
/// # Returns
/// The new account ID. A duplicate identity surfaces as the datastore's
/// unique-constraint violation.
pub async fn create_account(
    pool: &SqlitePool,
    realm: Realm,
    identity: &str,
    password_hash: &str,
    profile: &Profile,
) -> Result<i64, sqlx::Error> {
    let profile_columns = realm.profile_columns();

    let mut columns = vec![realm.identity_column(), "password_hash", "created_at"];
    columns.extend(profile_columns.iter().map(|(column, _)| *column));
    let placeholders = vec!["?"; columns.len()].join(", ");

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        realm.table(),
        columns.join(", "),
        placeholders
    );

    let mut query = sqlx::query(&sql)
        .bind(identity)
        .bind(password_hash)
        .bind(Utc::now());
    for (_, field) in profile_columns {
        query = query.bind(profile.value(*field));
    }

    let result = query.execute(pool).await?;
    Ok(result.last_insert_rowid())
}

/// Get account by identity, ignoring case
///
/// # Returns
/// Account or None if not found
pub async fn find_account(
    pool: &SqlitePool,
    realm: Realm,
    identity: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let sql = format!(
        "SELECT id, {column} AS identity, password_hash FROM {table} WHERE {column} = ?",
        column = realm.identity_column(),
        table = realm.table(),
    );

    sqlx::query_as::<_, Account>(&sql)
        .bind(identity)
        .fetch_optional(pool)
        .await
}

/// Stamp `last_login` for realms that track it
pub async fn record_login(pool: &SqlitePool, realm: Realm, id: i64) -> Result<(), sqlx::Error> {
    if !realm.tracks_last_login() {
        return Ok(());
    }

    let sql = format!("UPDATE {} SET last_login = ? WHERE id = ?", realm.table());
    sqlx::query(&sql)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) async fn count_accounts(pool: &SqlitePool, realm: Realm) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", realm.table());
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;

    async fn test_pool() -> SqlitePool {
        connect_database("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let pool = test_pool().await;
        let id = create_account(&pool, Realm::Kdt, "alice", "hash", &Profile::default())
            .await
            .unwrap();

        let account = find_account(&pool, Realm::Kdt, "alice").await.unwrap().unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.identity, "alice");
        assert_eq!(account.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_realms_are_isolated() {
        let pool = test_pool().await;
        create_account(&pool, Realm::Ginipet, "bob", "hash", &Profile::default())
            .await
            .unwrap();

        assert!(find_account(&pool, Realm::Kdt, "bob").await.unwrap().is_none());
        assert!(find_account(&pool, Realm::Ginipet, "bob").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_identity_is_unique_violation() {
        let pool = test_pool().await;
        create_account(&pool, Realm::Kdt, "alice", "hash", &Profile::default())
            .await
            .unwrap();

        let err = create_account(&pool, Realm::Kdt, "alice", "other", &Profile::default())
            .await
            .unwrap_err();
        let is_unique = err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false);
        assert!(is_unique, "expected unique violation, got {:?}", err);
        assert_eq!(count_accounts(&pool, Realm::Kdt).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_identity_ignores_case() {
        let pool = test_pool().await;
        let id = create_account(&pool, Realm::Greenmarket, "Carol", "hash", &Profile::default())
            .await
            .unwrap();

        let account = find_account(&pool, Realm::Greenmarket, "CAROL")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.identity, "Carol");

        let err = create_account(&pool, Realm::Greenmarket, "carol", "other", &Profile::default())
            .await
            .unwrap_err();
        assert!(err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false));
        assert_eq!(count_accounts(&pool, Realm::Greenmarket).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_profile_columns_are_stored() {
        let pool = test_pool().await;
        let profile = Profile {
            email: Some("carol@example.com".to_string()),
            phone: Some("010-1234-5678".to_string()),
            region: Some("  ".to_string()),
        };
        let id = create_account(&pool, Realm::Greenmarket, "carol", "hash", &profile)
            .await
            .unwrap();

        let (email, phone, region): (Option<String>, Option<String>, Option<String>) =
            sqlx::query_as("SELECT email, phone, region FROM greenmarket_users WHERE id = ?")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(email.as_deref(), Some("carol@example.com"));
        assert_eq!(phone.as_deref(), Some("010-1234-5678"));
        assert_eq!(region, None);
    }

    #[tokio::test]
    async fn test_record_login_only_for_tracking_realms() {
        let pool = test_pool().await;
        let id = create_account(&pool, Realm::Greenmarket, "dave", "hash", &Profile::default())
            .await
            .unwrap();

        record_login(&pool, Realm::Greenmarket, id).await.unwrap();
        let last_login: Option<String> =
            sqlx::query_scalar("SELECT last_login FROM greenmarket_users WHERE id = ?")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert!(last_login.is_some());

        // users has no last_login column; this must be a no-op
        record_login(&pool, Realm::Kdt, id).await.unwrap();
    }
}
