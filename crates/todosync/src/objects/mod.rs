//! Object storage for todo attachments.
//!
//! The server never proxies attachment bytes. It hands the client a
//! presigned upload URL and records the corresponding public read URL on the
//! todo item.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod local;

#[cfg(feature = "dynamodb")]
pub mod s3;

pub use local::LocalObjectStore;

#[cfg(feature = "dynamodb")]
pub use s3::S3ObjectStore;

#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("Failed to presign upload: {0}")]
    Presign(String),
}

/// A presigned upload plus the stable URL the object will be readable at.
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    /// Short-lived URL the client PUTs the attachment bytes to.
    pub upload_url: String,
    /// Durable read URL, without any signing query string.
    pub public_url: String,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Mint a presigned upload URL for a fresh attachment object.
    async fn presign_upload(&self, attachment_id: Uuid) -> Result<PresignedUpload, ObjectStoreError>;
}
