//! Test application fixture
//!
//! Builds the full router over a fresh in-memory SQLite database and a
//! temporary upload directory, and sends requests to it without binding a
//! socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use std::path::Path;

use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use kdt_server::backend::market::ImageStore;
use kdt_server::backend::routes::create_router;
use kdt_server::backend::server::{config::connect_database, AppState};

/// Signing secret shared by the fixture and the token helpers
pub const TEST_SECRET: &str = "integration-test-secret";

const BOUNDARY: &str = "kdt-test-boundary";

/// Status and parsed JSON body of one response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `error` message of a failure body
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

pub struct TestApp {
    router: Router,
    pub pool: SqlitePool,
    uploads: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = connect_database("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        let uploads = tempfile::tempdir().expect("Failed to create upload directory");
        let images = ImageStore::new(uploads.path());
        let router = create_router(AppState::new(pool.clone(), TEST_SECRET, images));
        Self {
            router,
            pool,
            uploads,
        }
    }

    /// Directory the image store writes to
    pub fn upload_dir(&self) -> &Path {
        self.uploads.path()
    }

    /// Send one request, optionally with a JSON body and a bearer token
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None, None).await
    }

    /// POST a multipart form with a single file field
    pub async fn upload(
        &self,
        uri: &str,
        field: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }
}
