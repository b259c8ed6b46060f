// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Router-level knobs taken from configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub max_request_bytes: usize,
    /// Adds `Secure` to the session cookies.
    pub cookie_secure: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            max_request_bytes: 64 * 1024 * 1024,
            cookie_secure: true,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: HttpSettings,
}
