// src/application/ports/storage.rs
use async_trait::async_trait;
use bytes::Bytes;

use crate::application::error::ApplicationResult;

/// Hosted object store holding talent, slider and applicant files.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `data` under `bucket/path` and returns its public URL. Never
    /// overwrites an existing object.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String>;

    async fn remove(&self, bucket: &str, path: &str) -> ApplicationResult<()>;
}
