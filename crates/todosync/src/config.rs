use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "todosync")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Name of the secondary index keyed by user (default: "GSI1")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub user_index_name: String,
    /// S3 bucket for attachment uploads (default: "todosync-attachments")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub attachments_bucket: String,
    /// Base URL for locally-served attachments
    /// (default: "http://localhost:9000/todosync-attachments")
    /// Note: Only used when the `inmemory` feature is enabled.
    #[allow(dead_code)]
    pub attachments_base_url: String,
    /// Lifetime of pre-signed upload URLs in seconds (default: 300)
    pub upload_url_ttl_seconds: u64,
    /// HS256 secret for bearer token verification (default: "dev-secret",
    /// for local development only)
    pub jwt_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - DynamoDB table name (default: "todosync")
    /// - `TODOS_USER_INDEX` - User secondary index name (default: "GSI1")
    /// - `ATTACHMENTS_BUCKET` - S3 bucket for uploads (default: "todosync-attachments")
    /// - `ATTACHMENTS_BASE_URL` - Base URL for the local object store
    /// - `UPLOAD_URL_TTL_SECONDS` - Pre-signed URL lifetime (default: 300)
    /// - `JWT_SECRET` - Token verification secret (default: "dev-secret")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TODOS_TABLE").unwrap_or_else(|_| "todosync".to_string()),
            user_index_name: env::var("TODOS_USER_INDEX").unwrap_or_else(|_| "GSI1".to_string()),
            attachments_bucket: env::var("ATTACHMENTS_BUCKET")
                .unwrap_or_else(|_| "todosync-attachments".to_string()),
            attachments_base_url: env::var("ATTACHMENTS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000/todosync-attachments".to_string()),
            upload_url_ttl_seconds: env::var("UPLOAD_URL_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret".to_string()),
        }
    }

    /// Get the upload URL lifetime as a Duration.
    pub fn upload_url_ttl(&self) -> Duration {
        Duration::from_secs(self.upload_url_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_ttl_conversion() {
        let config = Config {
            table_name: "todosync".to_string(),
            user_index_name: "GSI1".to_string(),
            attachments_bucket: "todosync-attachments".to_string(),
            attachments_base_url: "http://localhost:9000/todosync-attachments".to_string(),
            upload_url_ttl_seconds: 600,
            jwt_secret: "dev-secret".to_string(),
        };

        assert_eq!(config.upload_url_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("TODOS_TABLE");
        env::remove_var("TODOS_USER_INDEX");
        env::remove_var("ATTACHMENTS_BUCKET");
        env::remove_var("ATTACHMENTS_BASE_URL");
        env::remove_var("UPLOAD_URL_TTL_SECONDS");
        env::remove_var("JWT_SECRET");

        let config = Config::from_env();

        assert_eq!(config.table_name, "todosync");
        assert_eq!(config.user_index_name, "GSI1");
        assert_eq!(config.attachments_bucket, "todosync-attachments");
        assert_eq!(
            config.attachments_base_url,
            "http://localhost:9000/todosync-attachments"
        );
        assert_eq!(config.upload_url_ttl_seconds, 300);
        assert_eq!(config.jwt_secret, "dev-secret");
    }
}
