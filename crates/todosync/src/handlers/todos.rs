//! Todo CRUD handlers.
//!
//! Each handler extracts the authenticated user, parses the request, and
//! delegates to the todo service. Handlers catch nothing beyond shaping
//! known error types into statuses; a storage failure surfaces directly as a
//! failed response.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use todosync_core::todo::{CreateTodoRequest, TodoItem, TodoListResponse, UpdateTodoRequest};

use crate::{
    auth::CurrentUser,
    handlers::{error::service_error_status, AppError},
    service::ServiceError,
    state::AppState,
};

/// Error response with message (for body parse and service errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

fn service_error(err: ServiceError) -> (StatusCode, String) {
    error_response(service_error_status(&err), err.to_string())
}

/// Create a new todo (POST /todos).
pub async fn create_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), (StatusCode, String)> {
    let Json(payload) = body.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse body: {e}"),
        )
    })?;

    let item = state
        .service
        .create_todo(payload, &user_id)
        .await
        .map_err(service_error)?;

    tracing::info!(todo_id = %item.todo_id, name = %item.name, "Created todo");

    Ok((StatusCode::CREATED, Json(item)))
}

/// List the caller's todos (GET /todos).
pub async fn list_todos(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<TodoListResponse>, AppError> {
    let items = state.service.list_todos(&user_id).await?;

    Ok(Json(TodoListResponse { items }))
}

/// Update a todo's mutable fields (PATCH /todos/{todo_id}).
///
/// Returns an empty 200 on success.
pub async fn update_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<StatusCode, (StatusCode, String)> {
    let Json(payload) = body.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse body: {e}"),
        )
    })?;

    state
        .service
        .update_todo(todo_id, payload, &user_id)
        .await
        .map_err(service_error)?;

    tracing::info!(%todo_id, "Updated todo");

    Ok(StatusCode::OK)
}

/// Delete a todo (DELETE /todos/{todo_id}).
///
/// Deleting an absent item also returns 200.
pub async fn delete_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.service.delete_todo(todo_id, &user_id).await?;

    tracing::info!(%todo_id, "Deleted todo");

    Ok(StatusCode::OK)
}
