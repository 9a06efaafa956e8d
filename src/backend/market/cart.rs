/**
 * Cart Storage
 *
 * Queries over `greenmarket_cart`. Every statement that touches an
 * existing item is scoped by `user_id`, so one account can never read or
 * change another account's cart through these functions.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Cart item joined with its product
#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub name: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

pub async fn product_exists(pool: &SqlitePool, product_id: i64) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM greenmarket_products WHERE id = ?")
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Existing cart item for this product, if any
pub async fn find_item_for_product(
    pool: &SqlitePool,
    user_id: i64,
    product_id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT id FROM greenmarket_cart WHERE user_id = ? AND product_id = ?",
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_optional(pool)
    .await
}

pub async fn add_item(
    pool: &SqlitePool,
    user_id: i64,
    product_id: i64,
    quantity: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO greenmarket_cart (user_id, product_id, quantity, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(quantity)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// The caller's cart, newest first
pub async fn list_items(pool: &SqlitePool, user_id: i64) -> Result<Vec<CartLine>, sqlx::Error> {
    sqlx::query_as::<_, CartLine>(
        "SELECT c.id, c.product_id, c.quantity, p.name, p.price, c.created_at \
         FROM greenmarket_cart c \
         JOIN greenmarket_products p ON p.id = c.product_id \
         WHERE c.user_id = ? \
         ORDER BY c.id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Returns false when the item does not exist or belongs to someone else
pub async fn update_quantity(
    pool: &SqlitePool,
    user_id: i64,
    item_id: i64,
    quantity: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE greenmarket_cart SET quantity = ? WHERE id = ? AND user_id = ?")
        .bind(quantity)
        .bind(item_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false when the item does not exist or belongs to someone else
pub async fn remove_item(pool: &SqlitePool, user_id: i64, item_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM greenmarket_cart WHERE id = ? AND user_id = ?")
        .bind(item_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
