// src/infrastructure/repositories/postgres_talent.rs
//! One table per talent kind. Table names are taken from `TalentKind` only
//! and are never built from request input.

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::talent::{
    Block, NewTalent, Talent, TalentId, TalentKind, TalentReadRepository, TalentUpdate,
    TalentWriteRepository, sort_blocks,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use tracing::warn;

const COLUMNS: &str = "id, nombre, slug, video_url, imagen_principal_url, imagen_portada_url, \
     imagenes_urls, imagen_principal_index, bloques, orden, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTalentWriteRepository {
    pool: PgPool,
}

impl PostgresTalentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTalentReadRepository {
    pool: PgPool,
}

impl PostgresTalentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TalentRow {
    id: i64,
    nombre: String,
    slug: Option<String>,
    video_url: Option<String>,
    imagen_principal_url: Option<String>,
    imagen_portada_url: Option<String>,
    imagenes_urls: Option<Vec<String>>,
    imagen_principal_index: Option<i32>,
    bloques: Option<Json<Value>>,
    orden: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Rows written by older clients may carry blocks of unknown shape; those
/// entries are skipped instead of failing the read.
fn decode_blocks(id: i64, raw: Option<Json<Value>>) -> Vec<Block> {
    let Some(Json(Value::Array(items))) = raw else {
        return Vec::new();
    };
    let blocks = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Block>(item) {
            Ok(block) => Some(block),
            Err(err) => {
                warn!(id, error = %err, "skipping unreadable stored block");
                None
            }
        })
        .collect();
    sort_blocks(blocks)
}

impl TryFrom<TalentRow> for Talent {
    type Error = DomainError;

    fn try_from(row: TalentRow) -> Result<Self, Self::Error> {
        Ok(Talent {
            id: TalentId::new(row.id)?,
            nombre: row.nombre,
            slug: row.slug,
            video_url: row.video_url,
            imagen_principal_url: row.imagen_principal_url,
            imagen_portada_url: row.imagen_portada_url,
            imagenes_urls: row.imagenes_urls.unwrap_or_default(),
            imagen_principal_index: row.imagen_principal_index.unwrap_or(0),
            bloques: decode_blocks(row.id, row.bloques),
            orden: row.orden.unwrap_or(0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn not_found(kind: TalentKind, id: TalentId) -> DomainError {
    DomainError::NotFound(format!("talent {id} not found in {kind}"))
}

#[async_trait]
impl TalentWriteRepository for PostgresTalentWriteRepository {
    async fn insert(&self, kind: TalentKind, talent: NewTalent) -> DomainResult<Talent> {
        let NewTalent {
            nombre,
            slug,
            video_url,
            imagen_principal_url,
            imagen_portada_url,
            imagenes_urls,
            imagen_principal_index,
            bloques,
            orden,
            created_at,
            updated_at,
        } = talent;

        let sql = format!(
            "INSERT INTO {table} (nombre, slug, video_url, imagen_principal_url, imagen_portada_url, \
             imagenes_urls, imagen_principal_index, bloques, orden, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {COLUMNS}",
            table = kind.table_name()
        );
        let row = sqlx::query_as::<_, TalentRow>(&sql)
            .bind(nombre)
            .bind(slug)
            .bind(video_url)
            .bind(imagen_principal_url)
            .bind(imagen_portada_url)
            .bind(imagenes_urls)
            .bind(imagen_principal_index)
            .bind(Json(bloques))
            .bind(orden)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Talent::try_from(row)
    }

    async fn update(&self, kind: TalentKind, update: TalentUpdate) -> DomainResult<Talent> {
        let TalentUpdate {
            id,
            nombre,
            slug,
            video_url,
            imagen_principal_url,
            imagen_portada_url,
            imagenes_urls,
            imagen_principal_index,
            bloques,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ");
        builder.push(kind.table_name());
        builder.push(" SET updated_at = ");
        builder.push_bind(updated_at);
        builder.push(", nombre = ");
        builder.push_bind(nombre);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug);
        }

        builder.push(", video_url = ");
        builder.push_bind(video_url);
        builder.push(", imagen_principal_url = ");
        builder.push_bind(imagen_principal_url);
        builder.push(", imagen_portada_url = ");
        builder.push_bind(imagen_portada_url);
        builder.push(", imagenes_urls = ");
        builder.push_bind(imagenes_urls);
        builder.push(", imagen_principal_index = ");
        builder.push_bind(imagen_principal_index);
        builder.push(", bloques = ");
        builder.push_bind(Json(bloques));
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<TalentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| not_found(kind, id))?;

        Talent::try_from(row)
    }

    async fn delete(&self, kind: TalentKind, id: TalentId) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", kind.table_name());
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(not_found(kind, id));
        }
        Ok(())
    }

    async fn set_orden(&self, kind: TalentKind, id: TalentId, orden: i32) -> DomainResult<()> {
        let sql = format!(
            "UPDATE {} SET orden = $1, updated_at = NOW() WHERE id = $2",
            kind.table_name()
        );
        sqlx::query(&sql)
            .bind(orden)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl TalentReadRepository for PostgresTalentReadRepository {
    async fn list(&self, kind: TalentKind) -> DomainResult<Vec<Talent>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY orden ASC NULLS LAST, created_at ASC",
            kind.table_name()
        );
        let rows = sqlx::query_as::<_, TalentRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Talent::try_from).collect()
    }

    async fn find_by_id(&self, kind: TalentKind, id: TalentId) -> DomainResult<Option<Talent>> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", kind.table_name());
        let row = sqlx::query_as::<_, TalentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Talent::try_from).transpose()
    }

    async fn find_by_slug(&self, kind: TalentKind, slug: &str) -> DomainResult<Option<Talent>> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE slug = $1", kind.table_name());
        let row = sqlx::query_as::<_, TalentRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Talent::try_from).transpose()
    }

    async fn slugs_with_prefix(
        &self,
        kind: TalentKind,
        prefix: &str,
        exclude: Option<TalentId>,
    ) -> DomainResult<Vec<String>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT slug FROM ");
        builder.push(kind.table_name());
        builder.push(" WHERE slug LIKE ");
        builder.push_bind(format!("{}%", escape_like(prefix)));
        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }

        builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn max_orden(&self, kind: TalentKind) -> DomainResult<Option<i32>> {
        let sql = format!("SELECT MAX(orden) FROM {}", kind.table_name());
        sqlx::query_scalar::<_, Option<i32>>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn count(&self, kind: TalentKind) -> DomainResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::talent::BlockKind;
    use serde_json::json;

    #[test]
    fn stored_blocks_are_decoded_leniently_and_sorted() {
        let raw = Json(json!([
            {"tipo": "cine", "contenido": "b", "order": 2},
            {"tipo": "radio", "contenido": "?"},
            {"tipo": "teatro", "contenido": "a", "order": 1}
        ]));
        let blocks = decode_blocks(1, Some(raw));
        let kinds: Vec<_> = blocks.iter().map(|b| b.tipo).collect();
        assert_eq!(kinds, vec![BlockKind::Teatro, BlockKind::Cine]);
    }

    #[test]
    fn non_array_blocks_read_as_empty() {
        assert!(decode_blocks(1, Some(Json(json!({"tipo": "cine"})))).is_empty());
        assert!(decode_blocks(1, None).is_empty());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("a_b%c"), "a\\_b\\%c");
    }
}
