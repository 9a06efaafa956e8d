/**
 * Error Conversion
 *
 * This module turns `GatewayError` into HTTP responses and maps Axum
 * extractor rejections into the same taxonomy, so malformed bodies and
 * paths produce the usual `{ "error": ... }` shape instead of Axum's
 * plain-text rejections.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Error message" }
 * ```
 */

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::GatewayError;
use crate::shared::SharedError;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        SharedError::validation("body", rejection.body_text()).into()
    }
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        SharedError::validation("path", rejection.body_text()).into()
    }
}

impl From<MultipartRejection> for GatewayError {
    fn from(rejection: MultipartRejection) -> Self {
        SharedError::validation("body", rejection.body_text()).into()
    }
}

impl From<MultipartError> for GatewayError {
    fn from(error: MultipartError) -> Self {
        SharedError::validation("image", error.body_text()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = GatewayError::conflict("Username already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Username already exists" }));
    }

    #[tokio::test]
    async fn test_internal_response_hides_cause() {
        let response = GatewayError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_response_is_json() {
        let response = GatewayError::invalid_token().into_response();
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }
}
