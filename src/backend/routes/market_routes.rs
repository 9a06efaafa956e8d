/**
 * Market Routes
 *
 * Greenmarket cart routes sit behind `auth_middleware`, and the handlers
 * additionally reject tokens from other realms. Product image upload is
 * open like the rest of the product routes.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::market::{
    add_to_cart, get_cart, remove_cart_item, update_cart_item, upload_product_image,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure market routes
pub fn configure_market_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let cart = Router::new()
        .route("/greenmarket/cart", get(get_cart).post(add_to_cart))
        .route(
            "/greenmarket/cart/{id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route_layer(from_fn_with_state(app_state.gateway.clone(), auth_middleware));

    router
        .route("/greenmarket/products/{id}/image", post(upload_product_image))
        .merge(cart)
}
