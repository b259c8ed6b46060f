//! Adapters for the hosted backend's REST APIs (object storage and auth).

mod auth;
mod storage;

pub use auth::SupabaseAuthProvider;
pub use storage::SupabaseStorage;

use crate::application::error::ApplicationError;

/// Connection settings shared by the storage and auth adapters.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    anon_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("request to hosted backend failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("hosted backend returned {status}: {body}")]
    Api { status: u16, body: String },
}

impl From<SupabaseError> for ApplicationError {
    fn from(err: SupabaseError) -> Self {
        ApplicationError::infrastructure(err.to_string())
    }
}

impl SupabaseClient {
    /// `anon_key` falls back to the service key when not configured.
    pub fn new(base_url: &str, service_key: String, anon_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.unwrap_or_else(|| service_key.clone()),
            service_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(SupabaseError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
