//! Key construction for the single-table layout.
//!
//! ```text
//! PK:      USER#<user_id>
//! SK:      TODO#<todo_id>
//! GSI1PK:  USER#<user_id>
//! GSI1SK:  CREATED#<rfc3339-millis>#TODO#<todo_id>
//! ```
//!
//! The GSI sort key embeds the creation timestamp in fixed-width RFC 3339
//! millisecond form so lexicographic order matches creation order, with the
//! todo id as a tiebreaker.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub const USER_PREFIX: &str = "USER#";
pub const TODO_PREFIX: &str = "TODO#";
pub const CREATED_PREFIX: &str = "CREATED#";

pub fn todo_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

pub fn todo_sk(todo_id: Uuid) -> String {
    format!("{TODO_PREFIX}{todo_id}")
}

pub fn todo_gsi1_pk(user_id: &str) -> String {
    todo_pk(user_id)
}

pub fn todo_gsi1_sk(created_at: DateTime<Utc>, todo_id: Uuid) -> String {
    format!(
        "{CREATED_PREFIX}{}#{TODO_PREFIX}{todo_id}",
        created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
