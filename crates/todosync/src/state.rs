//! Application state with repository-based storage.
//!
//! The shared state passed to all request handlers. Dependencies are
//! constructed once at startup and injected explicitly; the storage and
//! object-store backends are selected via feature flags.

use std::sync::Arc;

use todosync_core::storage::TodoRepository;

use crate::auth::TokenVerifier;
use crate::objects::ObjectStore;
use crate::service::TodoService;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Todo service, wrapping the storage backend.
    pub service: Arc<TodoService>,
    /// Object store for attachment uploads.
    pub objects: Arc<dyn ObjectStore>,
    /// Bearer token verifier.
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Creates a new AppState from explicit dependencies.
    fn build(
        repo: Arc<dyn TodoRepository>,
        objects: Arc<dyn ObjectStore>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            service: Arc::new(TodoService::new(repo)),
            objects,
            verifier,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::auth::JwtVerifier;
    use crate::config::Config;
    use crate::objects::LocalObjectStore;
    use crate::storage::InMemoryTodoRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and a local object store.
        /// Useful for development and testing without AWS credentials.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryTodoRepository::new());
            let objects = Arc::new(LocalObjectStore::new(
                &config.attachments_base_url,
                config.upload_url_ttl(),
            ));
            let verifier = Arc::new(JwtVerifier::new(&config.jwt_secret));

            Ok(Self::build(repo, objects, verifier))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::auth::JwtVerifier;
    use crate::config::Config;
    use crate::objects::S3ObjectStore;
    use crate::storage::DynamoDbTodoRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage and S3 attachment uploads.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = Arc::new(DynamoDbTodoRepository::new(
                dynamodb_client,
                config.table_name.clone(),
                config.user_index_name.clone(),
            ));

            let s3_client = aws_sdk_s3::Client::new(&aws_config);
            let objects = Arc::new(S3ObjectStore::new(
                s3_client,
                config.attachments_bucket.clone(),
                config.upload_url_ttl(),
            ));

            let verifier = Arc::new(JwtVerifier::new(&config.jwt_secret));

            Ok(Self::build(repo, objects, verifier))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
