//! Todo service: orchestrates repository calls and shapes payloads.
//!
//! Constructed once per process with an explicit repository handle; no
//! module-level state.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use todosync_core::storage::{RepositoryError, TodoRepository};
use todosync_core::todo::{
    CreateTodoRequest, TodoItem, TodoStatus, UpdateTodoRequest, ValidationError,
};

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates storage access for todo items.
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Creates a service backed by the given repository.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Builds and persists a new item for `user_id`.
    ///
    /// Generates the `todo_id` and `created_at` server-side; the item starts
    /// pending with no attachment.
    pub async fn create_todo(
        &self,
        req: CreateTodoRequest,
        user_id: &str,
    ) -> Result<TodoItem, ServiceError> {
        req.validate()?;

        let item = TodoItem {
            user_id: user_id.to_string(),
            todo_id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: req.name,
            due_date: req.due_date,
            description: req.description,
            status: TodoStatus::Pending.as_i32(),
            attachment_url: String::new(),
        };

        self.repo.insert(&item).await?;

        tracing::debug!(todo_id = %item.todo_id, "Inserted todo");
        Ok(item)
    }

    /// Returns all items owned by `user_id` in store order.
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>, ServiceError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    /// Applies the mutable field set to an existing item.
    ///
    /// Ownership is enforced by the compound `(user_id, todo_id)` key; a key
    /// that does not resolve yields `NotFound`.
    pub async fn update_todo(
        &self,
        todo_id: Uuid,
        req: UpdateTodoRequest,
        user_id: &str,
    ) -> Result<(), ServiceError> {
        req.validate()?;
        self.repo
            .update_fields(todo_id, user_id, &req.into())
            .await?;
        Ok(())
    }

    /// Persists the stable read URL for an uploaded attachment.
    pub async fn set_attachment_url(
        &self,
        todo_id: Uuid,
        user_id: &str,
        url: &str,
    ) -> Result<(), ServiceError> {
        self.repo.set_attachment_url(todo_id, user_id, url).await?;
        Ok(())
    }

    /// Removes an item. Deleting an absent item succeeds.
    pub async fn delete_todo(&self, todo_id: Uuid, user_id: &str) -> Result<(), ServiceError> {
        self.repo.delete(todo_id, user_id).await?;
        Ok(())
    }
}
