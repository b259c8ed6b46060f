// src/domain/talent/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalentId(pub i64);

impl TalentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("talent id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TalentId> for i64 {
    fn from(value: TalentId) -> Self {
        value.0
    }
}

impl fmt::Display for TalentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Section heading a content block is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Television,
    Teatro,
    Cine,
    Publicidades,
    Formacion,
    Instagram,
    Premios,
    Idiomas,
    WebOficial,
    Facebook,
    Experiencia,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Television => "television",
            BlockKind::Teatro => "teatro",
            BlockKind::Cine => "cine",
            BlockKind::Publicidades => "publicidades",
            BlockKind::Formacion => "formacion",
            BlockKind::Instagram => "instagram",
            BlockKind::Premios => "premios",
            BlockKind::Idiomas => "idiomas",
            BlockKind::WebOficial => "web-oficial",
            BlockKind::Facebook => "facebook",
            BlockKind::Experiencia => "experiencia",
        }
    }
}

impl FromStr for BlockKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "television" => Ok(BlockKind::Television),
            "teatro" => Ok(BlockKind::Teatro),
            "cine" => Ok(BlockKind::Cine),
            "publicidades" => Ok(BlockKind::Publicidades),
            "formacion" => Ok(BlockKind::Formacion),
            "instagram" => Ok(BlockKind::Instagram),
            "premios" => Ok(BlockKind::Premios),
            "idiomas" => Ok(BlockKind::Idiomas),
            "web-oficial" => Ok(BlockKind::WebOficial),
            "facebook" => Ok(BlockKind::Facebook),
            "experiencia" => Ok(BlockKind::Experiencia),
            other => Err(DomainError::Validation(format!("unknown block type '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Block {
    pub tipo: BlockKind,
    pub contenido: String,
    pub order: i32,
}

/// Sorts blocks by their `order`, keeping submission order for ties.
pub fn sort_blocks(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.sort_by_key(|block| block.order);
    blocks
}

#[derive(Debug, Clone)]
pub struct Talent {
    pub id: TalentId,
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

#[derive(Debug, Clone)]
pub struct NewTalent {
    pub nombre: String,
    pub slug: String,
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

/// Full replacement of a talent's editable fields. `slug` is only rewritten
/// when present.
#[derive(Debug, Clone)]
pub struct TalentUpdate {
    pub id: TalentId,
    pub nombre: String,
    pub slug: Option<String>,
    pub video_url: Option<String>,
    pub imagen_principal_url: Option<String>,
    pub imagen_portada_url: Option<String>,
    pub imagenes_urls: Vec<String>,
    pub imagen_principal_index: i32,
    pub bloques: Vec<Block>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_kinds_use_kebab_case() {
        let block: Block =
            serde_json::from_str(r#"{"tipo":"web-oficial","contenido":"x","order":2}"#).unwrap();
        assert_eq!(block.tipo, BlockKind::WebOficial);
        assert_eq!(block.tipo.as_str().parse::<BlockKind>().unwrap(), BlockKind::WebOficial);
    }

    #[test]
    fn blocks_sort_by_order_stably() {
        let block = |tipo, order| Block {
            tipo,
            contenido: "c".into(),
            order,
        };
        let sorted = sort_blocks(vec![
            block(BlockKind::Cine, 2),
            block(BlockKind::Teatro, 0),
            block(BlockKind::Premios, 2),
        ]);
        let kinds: Vec<_> = sorted.iter().map(|b| b.tipo).collect();
        assert_eq!(kinds, vec![BlockKind::Teatro, BlockKind::Cine, BlockKind::Premios]);
    }

    #[test]
    fn talent_id_must_be_positive() {
        assert!(TalentId::new(0).is_err());
        assert_eq!(i64::from(TalentId::new(7).unwrap()), 7);
    }
}
