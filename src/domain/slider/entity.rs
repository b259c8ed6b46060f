// src/domain/slider/entity.rs
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

pub const DEFAULT_ALT_TEXT: &str = "Slider image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderImageId(pub Uuid);

impl From<SliderImageId> for Uuid {
    fn from(value: SliderImageId) -> Self {
        value.0
    }
}

impl fmt::Display for SliderImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct SliderImage {
    pub id: SliderImageId,
    pub imagen_url: String,
    pub alt_text: Option<String>,
    pub orden: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSliderImage {
    pub imagen_url: String,
    pub alt_text: Option<String>,
    pub orden: i32,
    pub created_at: DateTime<Utc>,
}
