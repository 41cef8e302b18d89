//! Todo API operations.

use reqwest::Method;
use uuid::Uuid;

use todosync_core::todo::{
    CreateTodoRequest, TodoItem, TodoListResponse, UpdateTodoRequest, UploadUrlResponse,
};

use super::TodoSyncClient;
use crate::error::{ClientError, Result};

impl TodoSyncClient {
    /// List the caller's todos.
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>> {
        let response = self.request(Method::GET, "/todos").send().await?;
        let listing: TodoListResponse = self.handle_response(response, "todos").await?;
        Ok(listing.items)
    }

    /// Create a new todo.
    pub async fn create_todo(&self, req: CreateTodoRequest) -> Result<TodoItem> {
        let response = self
            .request(Method::POST, "/todos")
            .json(&req)
            .send()
            .await?;
        self.handle_response(response, "todo").await
    }

    /// Update a todo's mutable fields.
    pub async fn update_todo(&self, todo_id: Uuid, req: UpdateTodoRequest) -> Result<()> {
        let response = self
            .request(Method::PATCH, &format!("/todos/{}", todo_id))
            .json(&req)
            .send()
            .await?;
        self.handle_empty_response(response, &format!("todo {}", todo_id))
            .await
    }

    /// Delete a todo by ID.
    pub async fn delete_todo(&self, todo_id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/todos/{}", todo_id))
            .send()
            .await?;
        self.handle_empty_response(response, &format!("todo {}", todo_id))
            .await
    }

    /// Request a presigned upload URL for an attachment on a todo.
    pub async fn request_upload_url(&self, todo_id: Uuid) -> Result<String> {
        let response = self
            .request(Method::POST, &format!("/todos/{}/attachment", todo_id))
            .send()
            .await?;
        let body: UploadUrlResponse = self
            .handle_response(response, &format!("todo {}", todo_id))
            .await?;
        Ok(body.upload_url)
    }

    /// Upload attachment bytes to a presigned URL with a raw PUT.
    ///
    /// The URL already embeds its credentials; no bearer token is attached.
    pub async fn upload_attachment(
        &self,
        upload_url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let response = self
            .client
            .put(upload_url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
