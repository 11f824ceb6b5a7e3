//! JSON request and response bodies for the to-do REST API.
//!
//! Shared by the axum server and the Yew front end so both sides agree
//! on field names.

use serde::{Deserialize, Serialize};

pub use core_types::Todo;

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Explicit position; appended after the last item when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            display_order: None,
        }
    }
}

/// Body of `PUT /api/todos/:id`. Both fields are written; a missing
/// `completed` counts as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `PUT /api/todos/order`.
///
/// `old_index` and `new_index` are display-order values, not list
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub item_id: i64,
    pub new_index: i64,
    pub old_index: i64,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_request_field_names() {
        let json = r#"{"itemId":4,"newIndex":1,"oldIndex":3}"#;
        let req: ReorderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            req,
            ReorderRequest {
                item_id: 4,
                new_index: 1,
                old_index: 3
            }
        );
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title":"milk"}"#).unwrap();

        assert_eq!(req, CreateTodoRequest::new("milk"));

        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("displayOrder"));
    }

    #[test]
    fn test_update_request_completed_defaults_to_false() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"title":"b"}"#).unwrap();

        assert_eq!(
            req,
            UpdateTodoRequest {
                title: "b".into(),
                completed: false,
            }
        );
    }

    #[test]
    fn test_api_error_code_is_optional() {
        let plain = serde_json::to_string(&ApiError::new("boom")).unwrap();
        assert_eq!(plain, r#"{"error":"boom"}"#);

        let coded = ApiError::with_code("Todo not found", "NOT_FOUND");
        assert_eq!(coded.code.as_deref(), Some("NOT_FOUND"));
    }
}
