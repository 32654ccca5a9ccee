// src/application/ports/images.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// External image host. Images never touch our own storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Uploads `source` (a data URI or remote URL) and returns the secure
    /// URL of the hosted copy.
    async fn upload(&self, source: &str) -> ApplicationResult<String>;
    /// Removes a previously uploaded image identified by its hosted URL.
    async fn delete(&self, url: &str) -> ApplicationResult<()>;
}
