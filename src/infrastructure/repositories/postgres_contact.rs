// src/infrastructure/repositories/postgres_contact.rs
use super::map_sqlx;
use crate::domain::contact::{Contact, ContactId, ContactRepository, NewContact};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: Uuid,
    nombre: String,
    apellido: String,
    email: String,
    mensaje: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: ContactId(row.id),
            nombre: row.nombre,
            apellido: row.apellido,
            email: row.email,
            mensaje: row.mensaje,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contactos (nombre, apellido, email, mensaje, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, nombre, apellido, email, mensaje, created_at, updated_at",
        )
        .bind(contact.nombre)
        .bind(contact.apellido)
        .bind(contact.email)
        .bind(contact.mensaje)
        .bind(contact.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self) -> DomainResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, nombre, apellido, email, mensaje, created_at, updated_at
             FROM contactos ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contactos WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("contact {id} not found")));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contactos")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
