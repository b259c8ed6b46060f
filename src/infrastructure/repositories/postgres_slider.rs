// src/infrastructure/repositories/postgres_slider.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slider::{NewSliderImage, SliderImage, SliderImageId, SliderRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSliderRepository {
    pool: PgPool,
}

impl PostgresSliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SliderRow {
    id: Uuid,
    imagen_url: String,
    alt_text: Option<String>,
    orden: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SliderRow> for SliderImage {
    fn from(row: SliderRow) -> Self {
        SliderImage {
            id: SliderImageId(row.id),
            imagen_url: row.imagen_url,
            alt_text: row.alt_text,
            orden: row.orden,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SliderRepository for PostgresSliderRepository {
    async fn insert(&self, image: NewSliderImage) -> DomainResult<SliderImage> {
        let row = sqlx::query_as::<_, SliderRow>(
            "INSERT INTO slider_imagenes (imagen_url, alt_text, orden, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, imagen_url, alt_text, orden, created_at, updated_at",
        )
        .bind(image.imagen_url)
        .bind(image.alt_text)
        .bind(image.orden)
        .bind(image.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self) -> DomainResult<Vec<SliderImage>> {
        let rows = sqlx::query_as::<_, SliderRow>(
            "SELECT id, imagen_url, alt_text, orden, created_at, updated_at
             FROM slider_imagenes ORDER BY orden ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: SliderImageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM slider_imagenes WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("slider image {id} not found")));
        }
        Ok(())
    }

    async fn max_orden(&self) -> DomainResult<Option<i32>> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(orden) FROM slider_imagenes")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn set_orden(&self, id: SliderImageId, orden: i32) -> DomainResult<()> {
        sqlx::query("UPDATE slider_imagenes SET orden = $1, updated_at = NOW() WHERE id = $2")
            .bind(orden)
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
