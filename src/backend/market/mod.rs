//! Greenmarket Module
//!
//! Token-protected shopping cart for greenmarket accounts, plus product
//! image uploads.
//!
//! - **`cart`** - Queries over `greenmarket_cart`, always scoped by owner
//! - **`handlers`** - axum handlers for `/greenmarket/cart`
//! - **`images`** - Image store and `/greenmarket/products/{id}/image`

pub mod cart;
pub mod handlers;
pub mod images;

pub use cart::CartLine;
pub use handlers::{add_to_cart, get_cart, remove_cart_item, update_cart_item};
pub use images::{upload_product_image, ImageStore, UPLOAD_ROUTE};
