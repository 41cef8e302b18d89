//! In-memory implementation of [`TodoRepository`].
//!
//! Backed by a `HashMap` keyed by `(user_id, todo_id)`, so one user's items
//! never collide with another's. Useful for local development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use todosync_core::storage::{RepositoryError, Result, TodoRepository};
use todosync_core::todo::{public_read_url, TodoItem, TodoUpdate};

#[derive(Default)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<HashMap<(String, Uuid), TodoItem>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let items = self.items.read().await;

        let mut result: Vec<TodoItem> = items
            .iter()
            .filter(|((owner, _), _)| owner == user_id)
            .map(|(_, item)| item.clone())
            .collect();

        result.sort_by(|a, b| (a.created_at, a.todo_id).cmp(&(b.created_at, b.todo_id)));

        Ok(result)
    }

    async fn insert(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;

        items.insert((item.user_id.clone(), item.todo_id), item.clone());

        Ok(())
    }

    async fn update_fields(
        &self,
        todo_id: Uuid,
        user_id: &str,
        update: &TodoUpdate,
    ) -> Result<()> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&(user_id.to_string(), todo_id)).ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: todo_id.to_string(),
            }
        })?;

        item.name = update.name.clone();
        item.due_date = update.due_date;
        item.description = update.description.clone();
        item.status = update.status;

        Ok(())
    }

    async fn set_attachment_url(&self, todo_id: Uuid, user_id: &str, url: &str) -> Result<()> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&(user_id.to_string(), todo_id)).ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: todo_id.to_string(),
            }
        })?;

        item.attachment_url = public_read_url(url).to_string();

        Ok(())
    }

    async fn delete(&self, todo_id: Uuid, user_id: &str) -> Result<()> {
        let mut items = self.items.write().await;

        // Removing an absent key is a no-op, the delete still succeeds.
        items.remove(&(user_id.to_string(), todo_id));

        Ok(())
    }
}
