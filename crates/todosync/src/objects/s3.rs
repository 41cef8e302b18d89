//! S3-backed object store.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use uuid::Uuid;

use super::{ObjectStore, ObjectStoreError, PresignedUpload};

pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    upload_ttl: Duration,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: &str, upload_ttl: Duration) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
            upload_ttl,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn presign_upload(
        &self,
        attachment_id: Uuid,
    ) -> Result<PresignedUpload, ObjectStoreError> {
        let config = PresigningConfig::expires_in(self.upload_ttl)
            .map_err(|e| ObjectStoreError::Presign(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(attachment_id.to_string())
            .presigned(config)
            .await
            .map_err(|e| ObjectStoreError::Presign(e.to_string()))?;

        let public_url = format!("https://{}.s3.amazonaws.com/{}", self.bucket, attachment_id);

        Ok(PresignedUpload {
            upload_url: presigned.uri().to_string(),
            public_url,
        })
    }
}
