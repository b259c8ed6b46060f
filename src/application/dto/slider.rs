use crate::domain::slider::SliderImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SliderImageDto {
    pub id: Uuid,
    pub imagen_url: String,
    pub alt_text: Option<String>,
    pub orden: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SliderImage> for SliderImageDto {
    fn from(image: SliderImage) -> Self {
        Self {
            id: image.id.into(),
            imagen_url: image.imagen_url,
            alt_text: image.alt_text,
            orden: image.orden,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}
