use crate::domain::talent::{Block, Talent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TalentDto {
    pub id: i64,
    pub nombre: String,
    pub slug: Option<String>,
    pub video_url: Option<String>,
    pub imagen_principal_url: Option<String>,
    pub imagen_portada_url: Option<String>,
    pub imagenes_urls: Vec<String>,
    pub imagen_principal_index: i32,
    pub bloques: Vec<Block>,
    pub orden: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Talent> for TalentDto {
    fn from(talent: Talent) -> Self {
        Self {
            id: talent.id.into(),
            nombre: talent.nombre,
            slug: talent.slug,
            video_url: talent.video_url,
            imagen_principal_url: talent.imagen_principal_url,
            imagen_portada_url: talent.imagen_portada_url,
            imagenes_urls: talent.imagenes_urls,
            imagen_principal_index: talent.imagen_principal_index,
            bloques: talent.bloques,
            orden: talent.orden,
            created_at: talent.created_at,
            updated_at: talent.updated_at,
        }
    }
}
