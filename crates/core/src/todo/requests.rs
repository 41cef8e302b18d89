//! Request and response payloads for the todos API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{TodoItem, TodoStatus, TodoUpdate};

/// Errors produced by request validation at the service boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("status must be 0 (pending), 1 (in-progress), or 2 (done), got {0}")]
    StatusOutOfRange(i32),
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Rejects names that are empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Body of `PATCH /todos/{todo_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub status: i32,
}

impl UpdateTodoRequest {
    /// Rejects empty names and status values outside 0..=2.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if TodoStatus::from_i32(self.status).is_none() {
            return Err(ValidationError::StatusOutOfRange(self.status));
        }
        Ok(())
    }
}

impl From<UpdateTodoRequest> for TodoUpdate {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoUpdate {
            name: req.name,
            due_date: req.due_date,
            description: req.description,
            status: req.status,
        }
    }
}

/// Envelope of `GET /todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
}

/// Body of the `POST /todos/{todo_id}/attachment` response.
///
/// Carries the time-limited write URL; the stable read URL is persisted on
/// the item before this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_create_request_accepts_valid_name() {
        let req = CreateTodoRequest {
            name: "Buy milk".to_string(),
            due_date: due(),
            description: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_name() {
        let req = CreateTodoRequest {
            name: "   ".to_string(),
            due_date: due(),
            description: None,
        };
        assert_eq!(req.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_update_request_rejects_out_of_range_status() {
        let req = UpdateTodoRequest {
            name: "Buy milk".to_string(),
            due_date: due(),
            description: None,
            status: 7,
        };
        assert_eq!(req.validate(), Err(ValidationError::StatusOutOfRange(7)));
    }

    #[test]
    fn test_update_request_accepts_all_defined_statuses() {
        for status in 0..=2 {
            let req = UpdateTodoRequest {
                name: "Buy milk".to_string(),
                due_date: due(),
                description: Some("2%".to_string()),
                status,
            };
            assert!(req.validate().is_ok(), "status {status} should validate");
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let req = CreateTodoRequest {
            name: "Buy milk".to_string(),
            due_date: due(),
            description: Some("2%".to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");

        let parsed: UpdateTodoRequest = serde_json::from_value(serde_json::json!({
            "name": "Buy milk",
            "dueDate": "2024-01-01",
            "description": "2%",
            "status": 2,
        }))
        .unwrap();
        assert_eq!(parsed.status, 2);
    }

    #[test]
    fn test_update_request_converts_to_todo_update() {
        let req = UpdateTodoRequest {
            name: "Buy milk".to_string(),
            due_date: due(),
            description: Some("2%".to_string()),
            status: 1,
        };
        let update = TodoUpdate::from(req.clone());
        assert_eq!(update.name, req.name);
        assert_eq!(update.status, 1);
    }
}
