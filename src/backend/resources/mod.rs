//! Generic Resource Module
//!
//! CRUD over the sandbox tables through a single `Resource` abstraction.
//!
//! # Module Structure
//!
//! ```text
//! resources/
//! ├── mod.rs          - Module exports
//! ├── repository.rs   - `Resource` trait and the SQL operations
//! ├── catalog.rs      - Goods, books, fruits, questions, products
//! └── handlers.rs     - Generic axum handlers
//! ```
//!
//! # Routes
//!
//! For each base path `B` (`/goods`, `/books`, `/fruits`,
//! `/greenmarket/products`):
//!
//! - `GET B` - list
//! - `POST B` - create, returns `{ success, insertId }`
//! - `GET B/{id}` - read one
//! - `PUT B/update/{id}` - overwrite
//! - `DELETE B/{id}` - remove
//!
//! Questions only accept `POST /question`.

pub mod repository;
pub mod catalog;
pub mod handlers;

pub use repository::Resource;
pub use catalog::{Book, Fruit, Goods, Product, Question};
pub use handlers::{
    create_resource, delete_resource, get_resource, list_resources, update_resource,
};
