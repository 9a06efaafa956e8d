/**
 * Resource Routes
 *
 * Mounts the generic CRUD handlers once per table.
 *
 * # Routes
 *
 * For `B` in `/goods`, `/books`, `/fruits`, `/greenmarket/products`:
 * - `GET B`, `POST B`
 * - `GET B/{id}`, `DELETE B/{id}`
 * - `PUT B/update/{id}`
 *
 * Plus `POST /question`.
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::resources::{
    create_resource, delete_resource, get_resource, list_resources, update_resource, Book, Fruit,
    Goods, Product, Question, Resource,
};
use crate::backend::server::state::AppState;

/// Full CRUD for one resource under `base`
fn crud_routes<R: Resource>(router: Router<AppState>, base: &str) -> Router<AppState> {
    router
        .route(base, get(list_resources::<R>).post(create_resource::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(get_resource::<R>).delete(delete_resource::<R>),
        )
        .route(&format!("{base}/update/{{id}}"), put(update_resource::<R>))
}

/// Configure resource routes
pub fn configure_resource_routes(router: Router<AppState>) -> Router<AppState> {
    let router = crud_routes::<Goods>(router, "/goods");
    let router = crud_routes::<Book>(router, "/books");
    let router = crud_routes::<Fruit>(router, "/fruits");
    let router = crud_routes::<Product>(router, "/greenmarket/products");

    router.route("/question", post(create_resource::<Question>))
}
