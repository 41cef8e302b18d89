//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, NaiveDate, Utc};
use todosync_core::storage::RepositoryError;
use todosync_core::todo::TodoItem;
use uuid::Uuid;

use super::keys;

pub const ENTITY_TYPE_TODO: &str = "TODO";

/// Convert a TodoItem to a DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::todo_pk(&todo.user_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::todo_sk(todo.todo_id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::todo_gsi1_pk(&todo.user_id)),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::todo_gsi1_sk(todo.created_at, todo.todo_id)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_TODO.to_string()),
    );

    // Data
    item.insert(
        "userId".to_string(),
        AttributeValue::S(todo.user_id.clone()),
    );
    item.insert(
        "todoId".to_string(),
        AttributeValue::S(todo.todo_id.to_string()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );
    item.insert("name".to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        "dueDate".to_string(),
        AttributeValue::S(todo.due_date.format("%Y-%m-%d").to_string()),
    );
    if let Some(desc) = &todo.description {
        item.insert("description".to_string(), AttributeValue::S(desc.clone()));
    }
    item.insert(
        "status".to_string(),
        AttributeValue::N(todo.status.to_string()),
    );
    item.insert(
        "attachmentUrl".to_string(),
        AttributeValue::S(todo.attachment_url.clone()),
    );

    item
}

/// Convert a DynamoDB item to a TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        user_id: get_string(item, "userId")?,
        todo_id: get_uuid(item, "todoId")?,
        created_at: get_datetime(item, "createdAt")?,
        name: get_string(item, "name")?,
        due_date: get_date(item, "dueDate")?,
        description: get_optional_string(item, "description"),
        status: get_i32(item, "status")?,
        attachment_url: get_optional_string(item, "attachmentUrl").unwrap_or_default(),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required date attribute (YYYY-MM-DD format).
fn get_date(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<NaiveDate, RepositoryError> {
    let s = get_string(item, key)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid date {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

/// Get a required numeric attribute.
fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?
        .parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem {
            user_id: "google-oauth2|1234".to_string(),
            todo_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            name: "Buy milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            description: Some("Two liters".to_string()),
            status: 1,
            attachment_url: "https://bucket.s3.amazonaws.com/obj".to_string(),
        }
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(todo.user_id, parsed.user_id);
        assert_eq!(todo.todo_id, parsed.todo_id);
        assert_eq!(todo.name, parsed.name);
        assert_eq!(todo.due_date, parsed.due_date);
        assert_eq!(todo.description, parsed.description);
        assert_eq!(todo.status, parsed.status);
        assert_eq!(todo.attachment_url, parsed.attachment_url);
    }

    #[test]
    fn test_todo_item_has_correct_keys() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);

        assert_eq!(
            item.get("PK").unwrap().as_s().unwrap(),
            "USER#google-oauth2|1234"
        );
        assert_eq!(
            item.get("SK").unwrap().as_s().unwrap(),
            "TODO#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(
            item.get("GSI1PK").unwrap().as_s().unwrap(),
            "USER#google-oauth2|1234"
        );
        assert!(item
            .get("GSI1SK")
            .unwrap()
            .as_s()
            .unwrap()
            .starts_with("CREATED#2024-01-15T10:30:00.000Z#TODO#"));
        assert_eq!(item.get("entityType").unwrap().as_s().unwrap(), "TODO");
    }

    #[test]
    fn test_missing_description_parses_as_none() {
        let todo = TodoItem {
            description: None,
            ..sample_todo()
        };
        let item = todo_to_item(&todo);

        assert!(!item.contains_key("description"));
        assert_eq!(item_to_todo(&item).unwrap().description, None);
    }

    #[test]
    fn test_missing_attachment_url_defaults_to_empty() {
        let todo = sample_todo();
        let mut item = todo_to_item(&todo);
        item.remove("attachmentUrl");

        assert_eq!(item_to_todo(&item).unwrap().attachment_url, "");
    }

    #[test]
    fn test_out_of_range_status_survives_round_trip() {
        let todo = TodoItem {
            status: 7,
            ..sample_todo()
        };
        let item = todo_to_item(&todo);

        assert_eq!(item_to_todo(&item).unwrap().status, 7);
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let todo = sample_todo();
        let mut item = todo_to_item(&todo);
        item.insert(
            "status".to_string(),
            AttributeValue::S("done".to_string()),
        );

        assert!(item_to_todo(&item).is_err());
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
