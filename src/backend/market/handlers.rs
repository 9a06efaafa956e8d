/**
 * Cart Handlers
 *
 * All routes sit behind `auth_middleware` and additionally require the
 * token to have been issued by the greenmarket realm.
 *
 * # Routes
 *
 * - `GET /greenmarket/cart` - caller's cart with product name and price
 * - `POST /greenmarket/cart` - add a product
 * - `PUT /greenmarket/cart/{id}` - change quantity
 * - `DELETE /greenmarket/cart/{id}` - remove an item
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::auth::realm::Realm;
use crate::backend::error::GatewayError;
use crate::backend::market::cart::{self, CartLine};
use crate::backend::middleware::AuthUser;
use crate::backend::resources::catalog::flexible_int;
use crate::backend::response::SuccessResponse;
use crate::shared::error::{require, SharedError};

#[derive(Deserialize, Debug, Default)]
pub struct AddToCartRequest {
    #[serde(default, deserialize_with = "flexible_int")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateCartRequest {
    #[serde(default, deserialize_with = "flexible_int")]
    pub quantity: Option<i64>,
}

fn positive_quantity(quantity: i64) -> Result<i64, SharedError> {
    if quantity < 1 {
        return Err(SharedError::validation("quantity", "must be at least 1"));
    }
    Ok(quantity)
}

fn item_not_found(item_id: i64) -> GatewayError {
    GatewayError::not_found(format!("No cart item found with id {}", item_id))
}

pub async fn get_cart(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<CartLine>>, GatewayError> {
    user.require_realm(Realm::Greenmarket)?;
    let lines = cart::list_items(&pool, user.id).await?;
    Ok(Json(lines))
}

/// Add a product to the caller's cart
///
/// # Errors
///
/// * `400 Bad Request` - Missing product, quantity below 1, or product already in the cart
/// * `401 Unauthorized` - Token missing, invalid, or not a greenmarket token
/// * `404 Not Found` - Unknown product
pub async fn add_to_cart(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    user.require_realm(Realm::Greenmarket)?;
    let Json(request) = payload?;
    let product_id = require("product_id", request.product_id)?;
    let quantity = positive_quantity(request.quantity.unwrap_or(1))?;

    if !cart::product_exists(&pool, product_id).await? {
        return Err(GatewayError::not_found(format!(
            "No product found with id {}",
            product_id
        )));
    }

    // Not atomic: two concurrent adds of the same product can both pass.
    if cart::find_item_for_product(&pool, user.id, product_id)
        .await?
        .is_some()
    {
        return Err(GatewayError::conflict("Product is already in the cart"));
    }

    let item_id = cart::add_item(&pool, user.id, product_id, quantity).await?;
    tracing::info!("Cart item {} added for: {}", item_id, user.username);
    Ok(Json(SuccessResponse::created(item_id)))
}

pub async fn update_cart_item(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCartRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    user.require_realm(Realm::Greenmarket)?;
    let Path(item_id) = path?;
    let Json(request) = payload?;
    let quantity = positive_quantity(require("quantity", request.quantity)?)?;

    if !cart::update_quantity(&pool, user.id, item_id, quantity).await? {
        return Err(item_not_found(item_id));
    }
    Ok(Json(SuccessResponse::ok()))
}

pub async fn remove_cart_item(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    user.require_realm(Realm::Greenmarket)?;
    let Path(item_id) = path?;

    if !cart::remove_item(&pool, user.id, item_id).await? {
        return Err(item_not_found(item_id));
    }
    tracing::info!("Cart item {} removed for: {}", item_id, user.username);
    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::AuthenticatedUser;
    use crate::backend::resources::catalog::{Product, ProductDraft};
    use crate::backend::resources::repository;
    use crate::backend::server::config::connect_database;
    use axum::http::StatusCode;

    fn shopper(id: i64, realm: Realm) -> AuthUser {
        AuthUser(AuthenticatedUser {
            id,
            username: format!("user{id}"),
            realm,
        })
    }

    fn add(product_id: i64, quantity: Option<i64>) -> AddToCartRequest {
        AddToCartRequest {
            product_id: Some(product_id),
            quantity,
        }
    }

    async fn setup() -> (SqlitePool, i64) {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let draft = ProductDraft {
            name: Some("tomato".to_string()),
            price: Some(3000),
            ..Default::default()
        };
        let product_id = repository::insert::<Product>(&pool, draft).await.unwrap();
        (pool, product_id)
    }

    #[test]
    fn test_positive_quantity() {
        assert_eq!(positive_quantity(1), Ok(1));
        assert!(positive_quantity(0).is_err());
        assert!(positive_quantity(-3).is_err());
    }

    #[tokio::test]
    async fn test_add_defaults_quantity_to_one() {
        let (pool, product_id) = setup().await;

        add_to_cart(
            State(pool.clone()),
            shopper(1, Realm::Greenmarket),
            Ok(Json(add(product_id, None))),
        )
        .await
        .unwrap();

        let Json(lines) = get_cart(State(pool), shopper(1, Realm::Greenmarket))
            .await
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[0].price, 3000);
    }

    #[tokio::test]
    async fn test_add_duplicate_is_rejected() {
        let (pool, product_id) = setup().await;
        let user = || shopper(1, Realm::Greenmarket);

        add_to_cart(State(pool.clone()), user(), Ok(Json(add(product_id, Some(2)))))
            .await
            .unwrap();
        let err = add_to_cart(State(pool), user(), Ok(Json(add(product_id, Some(1)))))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let (pool, product_id) = setup().await;
        let err = add_to_cart(
            State(pool),
            shopper(1, Realm::Greenmarket),
            Ok(Json(add(product_id + 100, None))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_other_realm_is_unauthorized() {
        let (pool, _) = setup().await;
        let err = get_cart(State(pool), shopper(1, Realm::Kdt))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_and_remove_are_scoped_to_owner() {
        let (pool, product_id) = setup().await;
        let Json(created) = add_to_cart(
            State(pool.clone()),
            shopper(1, Realm::Greenmarket),
            Ok(Json(add(product_id, None))),
        )
        .await
        .unwrap();
        let item_id = created.insert_id.unwrap();

        let err = remove_cart_item(
            State(pool.clone()),
            shopper(2, Realm::Greenmarket),
            Ok(Path(item_id)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = update_cart_item(
            State(pool.clone()),
            shopper(1, Realm::Greenmarket),
            Ok(Path(item_id)),
            Ok(Json(UpdateCartRequest { quantity: Some(0) })),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        update_cart_item(
            State(pool.clone()),
            shopper(1, Realm::Greenmarket),
            Ok(Path(item_id)),
            Ok(Json(UpdateCartRequest { quantity: Some(4) })),
        )
        .await
        .unwrap();

        remove_cart_item(State(pool), shopper(1, Realm::Greenmarket), Ok(Path(item_id)))
            .await
            .unwrap();
    }
}
