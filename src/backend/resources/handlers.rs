/**
 * Resource Handlers
 *
 * Generic axum handlers over any `Resource`. The router instantiates them
 * once per table, e.g. `get(list_resources::<Goods>)`.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::GatewayError;
use crate::backend::resources::repository::{self, Resource};
use crate::backend::response::SuccessResponse;

fn not_found<R: Resource>(id: i64) -> GatewayError {
    tracing::debug!("No {} with {} = {}", R::LABEL, R::KEY, id);
    GatewayError::not_found(format!("No {} found with id {}", R::LABEL, id))
}

/// `GET B` - every row as a JSON array
pub async fn list_resources<R: Resource>(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<R>>, GatewayError> {
    let rows = repository::list::<R>(&pool).await?;
    Ok(Json(rows))
}

/// `GET B/{id}` - one row, or 404
pub async fn get_resource<R: Resource>(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<R>, GatewayError> {
    let Path(id) = path?;
    repository::find::<R>(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<R>(id))
}

/// `POST B` - validate, insert, return `{ success, insertId }`
pub async fn create_resource<R: Resource>(
    State(pool): State<SqlitePool>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    let Json(draft) = payload?;
    R::validate(&draft)?;

    let id = repository::insert::<R>(&pool, draft).await?;
    tracing::info!("Created {} {}", R::LABEL, id);
    Ok(Json(SuccessResponse::created(id)))
}

/// `PUT B/update/{id}` - validate and overwrite, or 404
pub async fn update_resource<R: Resource>(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    let Path(id) = path?;
    let Json(draft) = payload?;
    R::validate(&draft)?;

    if !repository::update::<R>(&pool, id, draft).await? {
        return Err(not_found::<R>(id));
    }
    tracing::info!("Updated {} {}", R::LABEL, id);
    Ok(Json(SuccessResponse::ok()))
}

/// `DELETE B/{id}` - remove, or 404
pub async fn delete_resource<R: Resource>(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    let Path(id) = path?;

    if !repository::delete::<R>(&pool, id).await? {
        return Err(not_found::<R>(id));
    }
    tracing::info!("Deleted {} {}", R::LABEL, id);
    Ok(Json(SuccessResponse::ok()))
}
