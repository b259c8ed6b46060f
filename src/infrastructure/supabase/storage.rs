use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use super::SupabaseClient;
use crate::application::{error::ApplicationResult, ports::storage::ObjectStorage};

/// Storage REST API, authenticated with the service role key.
pub struct SupabaseStorage {
    client: SupabaseClient,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.client
            .url(&format!("/storage/v1/object/public/{bucket}/{path}"))
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String> {
        let response = self
            .client
            .http
            .post(self.client.url(&format!("/storage/v1/object/{bucket}/{path}")))
            .header("apikey", &self.client.service_key)
            .bearer_auth(&self.client.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(super::SupabaseError::from)?;
        SupabaseClient::ensure_success(response).await?;

        Ok(self.public_url(bucket, path))
    }

    async fn remove(&self, bucket: &str, path: &str) -> ApplicationResult<()> {
        let response = self
            .client
            .http
            .delete(self.client.url(&format!("/storage/v1/object/{bucket}")))
            .header("apikey", &self.client.service_key)
            .bearer_auth(&self.client.service_key)
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await
            .map_err(super::SupabaseError::from)?;
        SupabaseClient::ensure_success(response).await?;
        Ok(())
    }
}
