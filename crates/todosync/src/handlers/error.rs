use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todosync_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::service::ServiceError;

/// Application error type that wraps `anyhow::Error`.
///
/// Allows handlers to use `?` on fallible service and object-store calls;
/// known error types are downcast back out to pick the HTTP status.
pub struct AppError(pub anyhow::Error);

/// Status code for a service error: validation failures are the client's
/// fault, repository errors map through the shared table.
pub(crate) fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository(repo_error) => repository_status(repo_error),
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(err))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(service_error) = self.0.downcast_ref::<ServiceError>() {
            service_error_status(service_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_status(repo_error)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::warn!(status = %status_code, error = %self.0, "API error");

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
