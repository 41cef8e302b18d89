//! Attachment upload URL handler.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use todosync_core::todo::UploadUrlResponse;

use crate::{auth::CurrentUser, handlers::AppError, state::AppState};

/// Generate a presigned upload URL and record the attachment on the todo
/// (POST /todos/{todo_id}/attachment).
///
/// The stored `attachmentUrl` is the public read URL, with the presign query
/// string stripped. If the todo does not exist the response is a 404 and no
/// attachment is recorded.
pub async fn generate_upload_url(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let attachment_id = Uuid::new_v4();

    let presigned = state.objects.presign_upload(attachment_id).await?;

    state
        .service
        .set_attachment_url(todo_id, &user_id, &presigned.public_url)
        .await?;

    tracing::info!(%todo_id, %attachment_id, "Generated upload URL");

    Ok(Json(UploadUrlResponse {
        upload_url: presigned.upload_url,
    }))
}
