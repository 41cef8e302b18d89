//! Local object store used by the in-memory backend and tests.
//!
//! Mimics the shape of an S3 presigned URL against a configurable base URL
//! so the attachment flow is exercisable without AWS credentials.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::{ObjectStore, ObjectStoreError, PresignedUpload};

pub struct LocalObjectStore {
    base_url: String,
    upload_ttl: Duration,
}

impl LocalObjectStore {
    pub fn new(base_url: &str, upload_ttl: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            upload_ttl,
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn presign_upload(
        &self,
        attachment_id: Uuid,
    ) -> Result<PresignedUpload, ObjectStoreError> {
        let public_url = format!("{}/{}", self.base_url, attachment_id);
        let upload_url = format!(
            "{}?X-Amz-Expires={}&X-Amz-Signature={}",
            public_url,
            self.upload_ttl.as_secs(),
            Uuid::new_v4().simple()
        );

        Ok(PresignedUpload {
            upload_url,
            public_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use todosync_core::todo::public_read_url;

    use super::*;

    #[tokio::test]
    async fn test_public_url_has_no_query_string() {
        let store = LocalObjectStore::new("http://localhost:9000/bucket", Duration::from_secs(300));
        let presigned = store.presign_upload(Uuid::new_v4()).await.unwrap();

        assert!(!presigned.public_url.contains('?'));
        assert!(presigned.upload_url.contains("X-Amz-Expires=300"));
    }

    #[tokio::test]
    async fn test_upload_url_strips_to_public_url() {
        let store = LocalObjectStore::new("http://localhost:9000/bucket/", Duration::from_secs(60));
        let presigned = store.presign_upload(Uuid::new_v4()).await.unwrap();

        assert_eq!(public_read_url(&presigned.upload_url), presigned.public_url);
    }
}
