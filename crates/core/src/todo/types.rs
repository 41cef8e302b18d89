use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task record owned by one user.
///
/// The wire format is camelCase to match the public API. `(user_id, todo_id)`
/// uniquely identifies an item; `user_id` comes from the verified bearer
/// token and is never client-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: String,
    pub todo_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    /// 0=pending, 1=in-progress, 2=done. Kept as a raw integer because the
    /// storage layer persists whatever it is given; [`TodoStatus`] provides
    /// the named values and the range check applied at the service boundary.
    pub status: i32,
    /// Public-read URL of the attachment, empty until one is uploaded.
    /// Never stores a query string.
    #[serde(default)]
    pub attachment_url: String,
}

/// The named status values a well-formed item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Pending,
    InProgress,
    Done,
}

impl TodoStatus {
    /// The integer persisted on the wire and in storage.
    pub const fn as_i32(self) -> i32 {
        match self {
            TodoStatus::Pending => 0,
            TodoStatus::InProgress => 1,
            TodoStatus::Done => 2,
        }
    }

    /// Parses a stored integer, returning `None` for out-of-range values.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(TodoStatus::Pending),
            1 => Some(TodoStatus::InProgress),
            2 => Some(TodoStatus::Done),
            _ => None,
        }
    }

    /// Human-readable label for display output.
    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }
}

/// The mutable field set of a [`TodoItem`].
///
/// Everything else (`user_id`, `todo_id`, `created_at`) is immutable after
/// creation; `attachment_url` has its own dedicated operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub status: i32,
}
