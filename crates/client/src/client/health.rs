//! Health check operations.

use reqwest::Method;

use super::TodoSyncClient;
use crate::error::Result;

impl TodoSyncClient {
    /// Liveness probe. Succeeds if the server answers 200 on `/livez`.
    pub async fn livez(&self) -> Result<()> {
        let response = self.request(Method::GET, "/livez").send().await?;
        self.handle_empty_response(response, "livez").await
    }
}
