use axum::{
    http::{header, Method},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        attachments::generate_upload_url,
        health::livez,
        todos::{create_todo, delete_todo, list_todos, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{todo_id}", patch(update_todo).delete(delete_todo))
        .route("/todos/{todo_id}/attachment", post(generate_upload_url))
        .layer(cors)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
