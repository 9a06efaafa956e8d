/**
 * Generic Resource Repository
 *
 * One set of SQL operations shared by every sandbox table. A table opts in
 * by implementing `Resource`, which names its table, key and writable
 * columns and knows how to validate and bind its request body.
 *
 * Table and column names only ever come from the `Resource` constants, so
 * the SQL assembled here never contains request data; values travel as
 * bound parameters.
 */

use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::shared::error::SharedError;

/// Parameterized statement over the SQLite driver
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A table served through the generic CRUD routes
pub trait Resource: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + 'static {
    /// Request body accepted by create and update
    type Draft: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    /// Integer primary key
    const KEY: &'static str;
    /// Writable columns, in the order `bind_draft` binds them
    const COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause for listings
    const ORDER: Option<&'static str> = None;
    /// Singular noun used in log lines and 404 messages
    const LABEL: &'static str;

    /// Check required fields before anything reaches the datastore
    fn validate(draft: &Self::Draft) -> Result<(), SharedError>;

    /// Bind one value per entry of `COLUMNS`
    fn bind_draft<'q>(draft: Self::Draft, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

fn select_sql<R: Resource>() -> String {
    format!("SELECT * FROM {}", R::TABLE)
}

fn insert_sql<R: Resource>() -> String {
    let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders
    )
}

fn update_sql<R: Resource>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {} WHERE {} = ?", R::TABLE, assignments, R::KEY)
}

/// Every row, in the resource's listing order
pub async fn list<R: Resource>(pool: &SqlitePool) -> Result<Vec<R>, sqlx::Error> {
    let mut sql = select_sql::<R>();
    if let Some(order) = R::ORDER {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }

    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(|row| R::from_row(row)).collect()
}

/// One row by key
pub async fn find<R: Resource>(pool: &SqlitePool, id: i64) -> Result<Option<R>, sqlx::Error> {
    let sql = format!("{} WHERE {} = ?", select_sql::<R>(), R::KEY);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.map(|row| R::from_row(&row)).transpose()
}

/// Insert a validated draft, returning the new key
pub async fn insert<R: Resource>(pool: &SqlitePool, draft: R::Draft) -> Result<i64, sqlx::Error> {
    let sql = insert_sql::<R>();
    let result = R::bind_draft(draft, sqlx::query(&sql)).execute(pool).await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite every writable column of one row. Returns false when no row
/// has that key.
pub async fn update<R: Resource>(
    pool: &SqlitePool,
    id: i64,
    draft: R::Draft,
) -> Result<bool, sqlx::Error> {
    let sql = update_sql::<R>();
    let result = R::bind_draft(draft, sqlx::query(&sql))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false when no row has that key
pub async fn delete<R: Resource>(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE {} = ?", R::TABLE, R::KEY);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
