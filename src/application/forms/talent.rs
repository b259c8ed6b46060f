// src/application/forms/talent.rs
use serde::Deserialize;
use tracing::warn;
use validator::{Validate, ValidationError};

use crate::{
    application::error::ApplicationResult,
    domain::talent::{Block, BlockKind, sort_blocks},
};

/// Content block as submitted. `tipo` stays a string until validated so an
/// unknown kind is reported per field instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BlockInput {
    #[validate(custom(function = "validate_block_kind"))]
    pub tipo: String,
    #[validate(length(min = 1, message = "El contenido es requerido"))]
    pub contenido: String,
    pub order: i32,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default)]
    tipo: String,
    #[serde(default)]
    contenido: String,
    #[serde(default)]
    order: Option<i32>,
}

fn validate_block_kind(tipo: &str) -> Result<(), ValidationError> {
    tipo.parse::<BlockKind>().map(|_| ()).map_err(|_| {
        ValidationError::new("block_kind").with_message("Tipo de bloque inválido".into())
    })
}

/// Decodes the `bloques` JSON field. Malformed input yields no blocks; a
/// missing `order` defaults to the block's position.
pub fn parse_blocks(raw: Option<&str>) -> Vec<BlockInput> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<RawBlock>>(raw) {
        Ok(blocks) => blocks
            .into_iter()
            .zip(0..)
            .map(|(block, position)| BlockInput {
                tipo: block.tipo,
                contenido: block.contenido,
                order: block.order.unwrap_or(position),
            })
            .collect(),
        Err(err) => {
            warn!(error = %err, "discarding malformed bloques payload");
            Vec::new()
        }
    }
}

/// Lenient integer field: anything unparsable reads as `0`.
pub fn parse_index(raw: Option<&str>) -> i64 {
    raw.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

/// Decodes the `existingImages` JSON field. An absent or blank value keeps
/// nothing; only a malformed one falls back to the stored images.
pub fn parse_existing_images(raw: Option<&str>, stored: &[String]) -> Vec<String> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|err| {
        warn!(error = %err, "malformed existingImages, keeping stored images");
        stored.to_vec()
    })
}

/// Text fields of the talent create/edit form.
#[derive(Debug, Clone, Validate)]
pub struct TalentForm {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres"))]
    pub nombre: String,
    #[validate(url(message = "URL inválida"))]
    pub video_url: Option<String>,
    #[validate(nested)]
    pub bloques: Vec<BlockInput>,
    pub imagen_principal: i64,
}

#[derive(Debug, Clone)]
pub struct ValidTalent {
    pub nombre: String,
    pub video_url: Option<String>,
    pub bloques: Vec<Block>,
    pub imagen_principal: i64,
}

impl TalentForm {
    pub fn validated(self) -> ApplicationResult<ValidTalent> {
        self.validate()?;
        let mut bloques = Vec::with_capacity(self.bloques.len());
        for block in self.bloques {
            bloques.push(Block {
                tipo: block.tipo.parse()?,
                contenido: block.contenido,
                order: block.order,
            });
        }
        Ok(ValidTalent {
            nombre: self.nombre.trim().to_owned(),
            video_url: self.video_url,
            bloques: sort_blocks(bloques),
            imagen_principal: self.imagen_principal,
        })
    }
}
