//! Authentication test helpers
//!
//! Provides utilities for creating accounts through the HTTP routes and
//! minting tokens directly.

use serde_json::json;

use kdt_server::backend::auth::{Realm, TokenIssuer};

use super::app::{TestApp, TEST_SECRET};

/// Register an account in `realm` and log it in, returning the token
pub async fn register_and_login(app: &TestApp, realm: Realm, identity: &str, password: &str) -> String {
    let credentials = json!({ "username": identity, "password": password });

    let response = app.post(realm.register_path(), credentials.clone()).await;
    assert!(
        response.status.is_success(),
        "register failed: {:?}",
        response
    );

    let response = app.post(realm.login_path(), credentials).await;
    response.body["token"]
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| panic!("login failed: {:?}", response))
}

/// Issuer holding the fixture's signing secret
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET.as_bytes())
}

/// A token that expired an hour ago
pub fn expired_token(id: i64, username: &str, realm: Realm) -> String {
    let two_hours_ago = (chrono::Utc::now().timestamp() - 2 * 60 * 60) as u64;
    test_issuer()
        .issue_at(id, username, realm, two_hours_ago)
        .expect("Failed to sign token")
}
