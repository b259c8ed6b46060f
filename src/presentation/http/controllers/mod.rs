// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod contacts;
pub mod materials;
pub mod slider;
pub mod talents;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::error::{HttpError, HttpResult};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `?id=` selector used by the delete endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn uuid(&self) -> HttpResult<Uuid> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| HttpError::bad_request("ID requerido"))?;
        Uuid::parse_str(raw).map_err(|_| HttpError::bad_request(format!("invalid id '{raw}'")))
    }
}
