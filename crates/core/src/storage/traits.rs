use async_trait::async_trait;
use uuid::Uuid;

use crate::todo::{TodoItem, TodoUpdate};

use super::Result;

/// Repository for todo item storage.
///
/// All coordination (uniqueness, isolation) is delegated to the backing
/// store's per-key semantics; there are no cross-item transactions.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns all items owned by `user_id`, in creation order, assuming the
    /// result fits in a single page.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Unconditional put. Uniqueness is the caller's responsibility via
    /// random `todo_id` generation.
    async fn insert(&self, item: &TodoItem) -> Result<()>;

    /// Updates the mutable field set of an existing item. Fails with
    /// `NotFound` if `(user_id, todo_id)` does not exist.
    async fn update_fields(&self, todo_id: Uuid, user_id: &str, update: &TodoUpdate) -> Result<()>;

    /// Sets the attachment URL of an existing item, stripping any query
    /// string before storage. Fails with `NotFound` if the key is absent.
    async fn set_attachment_url(&self, todo_id: Uuid, user_id: &str, url: &str) -> Result<()>;

    /// Unconditional delete. Deleting an absent key succeeds.
    async fn delete(&self, todo_id: Uuid, user_id: &str) -> Result<()>;
}
