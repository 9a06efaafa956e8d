//! Success bodies shared by the write endpoints.

use serde::{Deserialize, Serialize};

/// `{ "success": true }`, with `insertId` for creates
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(rename = "insertId", skip_serializing_if = "Option::is_none", default)]
    pub insert_id: Option<i64>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            insert_id: None,
        }
    }

    pub fn created(insert_id: i64) -> Self {
        Self {
            success: true,
            insert_id: Some(insert_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_insert_id() {
        let json = serde_json::to_value(SuccessResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_created_uses_camel_case_key() {
        let json = serde_json::to_value(SuccessResponse::created(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "insertId": 42 }));
    }
}
