//! Response envelope
//!
//! Every endpoint answers with the same envelope:
//! `{success, message, timestamp, version, data, pagination?, meta}`.
//! `data` and `meta` are open JSON objects; handlers add entries by key.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::error::ApiError;

/// API version reported in every envelope
pub const API_VERSION: &str = "1.0.0";

/// Message used when a handler does not set one
pub const DEFAULT_MESSAGE: &str = "Operation completed successfully";

/// Uniform response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub meta: Map<String, Value>,
}

impl ApiResponse {
    /// Successful envelope with the default message and no payload
    pub fn ok() -> Self {
        Self {
            success: true,
            message: DEFAULT_MESSAGE.to_string(),
            timestamp: Utc::now(),
            version: API_VERSION.to_string(),
            data: Map::new(),
            pagination: None,
            meta: Map::new(),
        }
    }

    /// Failed envelope carrying only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::ok()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add `value` to `data` under `key`
    pub fn with_data<T: Serialize + ?Sized>(
        mut self,
        key: &str,
        value: &T,
    ) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value).map_err(|e| {
            ApiError::internal_error(format!("Failed to serialize {}: {}", key, e))
        })?;
        self.data.insert(key.to_string(), value);
        Ok(self)
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Pagination block. Only `total_items` is ever filled in; the rest keep
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: 10,
        }
    }
}

impl Pagination {
    pub fn with_total_items(total_items: u64) -> Self {
        Self {
            total_items,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["success"], json!(true));
        assert_eq!(obj["message"], json!(DEFAULT_MESSAGE));
        assert_eq!(obj["version"], json!("1.0.0"));
        assert_eq!(obj["data"], json!({}));
        assert_eq!(obj["meta"], json!({}));
        assert!(obj["timestamp"].is_string());
        assert!(!obj.contains_key("pagination"));
    }

    #[test]
    fn test_builder_fills_sections() {
        let response = ApiResponse::ok()
            .with_message("Listed")
            .with_data("items", &vec![1, 2, 3])
            .unwrap()
            .with_pagination(Pagination::with_total_items(3))
            .with_meta("format", "json");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], json!("Listed"));
        assert_eq!(value["data"]["items"], json!([1, 2, 3]));
        assert_eq!(
            value["pagination"],
            json!({ "current_page": 1, "total_pages": 1, "total_items": 3, "items_per_page": 10 })
        );
        assert_eq!(value["meta"]["format"], json!("json"));
    }

    #[test]
    fn test_failure_envelope() {
        let response = ApiResponse::failure("Page not found");
        assert!(!response.success);
        assert_eq!(response.message, "Page not found");
        assert!(response.data.is_empty());
    }
}
