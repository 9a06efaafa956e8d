/**
 * Product Images
 *
 * Multipart upload of a greenmarket product image. The file is written to
 * the configured upload directory under a generated name, and the public
 * path it is served from (`/uploads/<file>`) is recorded on the product.
 *
 * # Routes
 *
 * - `POST /greenmarket/products/{id}/image` - multipart form with an `image` file field
 *
 * Replacing an image leaves the previous file in place.
 */

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::PathRejection,
        Path, State,
    },
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::GatewayError;
use crate::backend::market::cart;
use crate::shared::error::SharedError;

/// Form field carrying the file
pub const IMAGE_FIELD: &str = "image";

/// URL prefix stored images are served under
pub const UPLOAD_ROUTE: &str = "/uploads";

const FALLBACK_EXTENSION: &str = "bin";

/// Directory that uploaded images are written to
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &FsPath {
        &self.dir
    }

    /// Write one product image, returning the URL path it is served from
    pub async fn save(
        &self,
        product_id: i64,
        file_name: Option<&str>,
        data: &[u8],
    ) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let stored = format!(
            "{}-{}.{}",
            product_id,
            Utc::now().timestamp_millis(),
            extension(file_name)
        );
        tokio::fs::write(self.dir.join(&stored), data).await?;

        Ok(format!("{UPLOAD_ROUTE}/{stored}"))
    }
}

/// Lower-cased extension of the client's file name, if it is a plain one
fn extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| FsPath::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

/// Record the image path on a product. Returns false when no row has that id.
pub async fn set_image_url(
    pool: &SqlitePool,
    product_id: i64,
    image_url: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE greenmarket_products SET image_url = ? WHERE id = ?")
        .bind(image_url)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// `{ "success": true, "imageUrl": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageUploadResponse {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

struct ImageUpload {
    file_name: Option<String>,
    data: Vec<u8>,
}

/// First `image` field of the form; other fields are skipped
async fn read_image_field(multipart: &mut Multipart) -> Result<ImageUpload, GatewayError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        match field.content_type() {
            Some(content_type) if content_type.starts_with("image/") => {}
            _ => {
                return Err(SharedError::validation(IMAGE_FIELD, "must be an image file").into());
            }
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(SharedError::missing(IMAGE_FIELD).into());
        }

        return Ok(ImageUpload {
            file_name,
            data: data.to_vec(),
        });
    }

    Err(SharedError::missing(IMAGE_FIELD).into())
}

/// Attach an uploaded image to a product
///
/// # Errors
///
/// * `400 Bad Request` - Not a multipart body, no `image` field, or not an image
/// * `404 Not Found` - Unknown product
pub async fn upload_product_image(
    State(pool): State<SqlitePool>,
    State(images): State<ImageStore>,
    path: Result<Path<i64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageUploadResponse>, GatewayError> {
    let Path(product_id) = path?;
    let mut multipart = multipart?;

    if !cart::product_exists(&pool, product_id).await? {
        return Err(GatewayError::not_found(format!(
            "No product found with id {}",
            product_id
        )));
    }

    let upload = read_image_field(&mut multipart).await?;
    let image_url = images
        .save(product_id, upload.file_name.as_deref(), &upload.data)
        .await?;

    if !set_image_url(&pool, product_id, &image_url).await? {
        return Err(GatewayError::not_found(format!(
            "No product found with id {}",
            product_id
        )));
    }

    tracing::info!(
        "Stored {} bytes for product {} at {}",
        upload.data.len(),
        product_id,
        image_url
    );
    Ok(Json(ImageUploadResponse {
        success: true,
        image_url,
    }))
}
