// src/infrastructure/repositories/postgres_material.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::material::{
    ApplicantProfile, MaterialId, MaterialRepository, MaterialSubmission, NewMaterialSubmission,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const PROFILE_COLUMNS: &str = "nombre_completo, apellido, edad, fecha_nacimiento, nombre_artistico, \
     nombre_adulto_responsable, email, whatsapp, tik_tok, instagram, nacionalidad, \
     residencia_actual, pasaporte, dni, licencia_conducir, altura, peso, contextura, \
     color_pelo, color_ojos, talle_remera, pantalon, calzado, tatuajes, cicatrices, \
     alergias, alimentacion, alimentacion_otros, hijos, obra_social, \
     contacto_emergencia, instrumentos, canta, idiomas, acento_neutro, deportes, \
     baila, otras_habilidades";

#[derive(Clone)]
pub struct PostgresMaterialRepository {
    pool: PgPool,
}

impl PostgresMaterialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaterialRow {
    id: Uuid,
    nombre_completo: String,
    apellido: String,
    edad: i32,
    fecha_nacimiento: String,
    nombre_artistico: Option<String>,
    nombre_adulto_responsable: Option<String>,
    email: String,
    whatsapp: String,
    tik_tok: Option<String>,
    instagram: Option<String>,
    nacionalidad: String,
    residencia_actual: Option<String>,
    pasaporte: Option<String>,
    dni: Option<String>,
    licencia_conducir: Option<String>,
    altura: Option<String>,
    peso: Option<String>,
    contextura: Option<String>,
    color_pelo: Option<String>,
    color_ojos: Option<String>,
    talle_remera: Option<String>,
    pantalon: Option<String>,
    calzado: Option<String>,
    tatuajes: Option<String>,
    cicatrices: Option<String>,
    alergias: Option<String>,
    alimentacion: Option<String>,
    alimentacion_otros: Option<String>,
    hijos: Option<String>,
    obra_social: Option<String>,
    contacto_emergencia: Option<String>,
    instrumentos: Option<String>,
    canta: Option<String>,
    idiomas: Option<String>,
    acento_neutro: Option<String>,
    deportes: Option<String>,
    baila: Option<String>,
    otras_habilidades: Option<String>,
    reel_url: Option<String>,
    cv_pdf_url: Option<String>,
    imagenes_urls: Option<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MaterialRow> for MaterialSubmission {
    fn from(row: MaterialRow) -> Self {
        let profile = ApplicantProfile {
            nombre_completo: row.nombre_completo,
            apellido: row.apellido,
            edad: row.edad,
            fecha_nacimiento: row.fecha_nacimiento,
            nombre_artistico: row.nombre_artistico,
            nombre_adulto_responsable: row.nombre_adulto_responsable,
            email: row.email,
            whatsapp: row.whatsapp,
            tik_tok: row.tik_tok,
            instagram: row.instagram,
            nacionalidad: row.nacionalidad,
            residencia_actual: row.residencia_actual,
            pasaporte: row.pasaporte,
            dni: row.dni,
            licencia_conducir: row.licencia_conducir,
            altura: row.altura,
            peso: row.peso,
            contextura: row.contextura,
            color_pelo: row.color_pelo,
            color_ojos: row.color_ojos,
            talle_remera: row.talle_remera,
            pantalon: row.pantalon,
            calzado: row.calzado,
            tatuajes: row.tatuajes,
            cicatrices: row.cicatrices,
            alergias: row.alergias,
            alimentacion: row.alimentacion,
            alimentacion_otros: row.alimentacion_otros,
            hijos: row.hijos,
            obra_social: row.obra_social,
            contacto_emergencia: row.contacto_emergencia,
            instrumentos: row.instrumentos,
            canta: row.canta,
            idiomas: row.idiomas,
            acento_neutro: row.acento_neutro,
            deportes: row.deportes,
            baila: row.baila,
            otras_habilidades: row.otras_habilidades,
        };
        MaterialSubmission {
            id: MaterialId(row.id),
            profile,
            reel_url: row.reel_url,
            cv_pdf_url: row.cv_pdf_url,
            imagenes_urls: row.imagenes_urls.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn select_columns() -> String {
    format!("id, {PROFILE_COLUMNS}, reel_url, cv_pdf_url, imagenes_urls, created_at, updated_at")
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    async fn insert(&self, submission: NewMaterialSubmission) -> DomainResult<MaterialSubmission> {
        let NewMaterialSubmission {
            profile,
            reel_url,
            cv_pdf_url,
            imagenes_urls,
            created_at,
        } = submission;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO envia_material (");
        builder.push(PROFILE_COLUMNS);
        builder.push(", reel_url, cv_pdf_url, imagenes_urls, created_at, updated_at) VALUES (");
        let mut separated = builder.separated(", ");
        separated.push_bind(profile.nombre_completo);
        separated.push_bind(profile.apellido);
        separated.push_bind(profile.edad);
        separated.push_bind(profile.fecha_nacimiento);
        separated.push_bind(profile.nombre_artistico);
        separated.push_bind(profile.nombre_adulto_responsable);
        separated.push_bind(profile.email);
        separated.push_bind(profile.whatsapp);
        separated.push_bind(profile.tik_tok);
        separated.push_bind(profile.instagram);
        separated.push_bind(profile.nacionalidad);
        separated.push_bind(profile.residencia_actual);
        separated.push_bind(profile.pasaporte);
        separated.push_bind(profile.dni);
        separated.push_bind(profile.licencia_conducir);
        separated.push_bind(profile.altura);
        separated.push_bind(profile.peso);
        separated.push_bind(profile.contextura);
        separated.push_bind(profile.color_pelo);
        separated.push_bind(profile.color_ojos);
        separated.push_bind(profile.talle_remera);
        separated.push_bind(profile.pantalon);
        separated.push_bind(profile.calzado);
        separated.push_bind(profile.tatuajes);
        separated.push_bind(profile.cicatrices);
        separated.push_bind(profile.alergias);
        separated.push_bind(profile.alimentacion);
        separated.push_bind(profile.alimentacion_otros);
        separated.push_bind(profile.hijos);
        separated.push_bind(profile.obra_social);
        separated.push_bind(profile.contacto_emergencia);
        separated.push_bind(profile.instrumentos);
        separated.push_bind(profile.canta);
        separated.push_bind(profile.idiomas);
        separated.push_bind(profile.acento_neutro);
        separated.push_bind(profile.deportes);
        separated.push_bind(profile.baila);
        separated.push_bind(profile.otras_habilidades);
        separated.push_bind(reel_url);
        separated.push_bind(cv_pdf_url);
        separated.push_bind(imagenes_urls);
        separated.push_bind(created_at);
        separated.push_bind(created_at);
        separated.push_unseparated(") RETURNING ");
        builder.push(select_columns());

        let row = builder
            .build_query_as::<MaterialRow>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self) -> DomainResult<Vec<MaterialSubmission>> {
        let sql = format!(
            "SELECT {} FROM envia_material ORDER BY created_at DESC",
            select_columns()
        );
        let rows = sqlx::query_as::<_, MaterialRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: MaterialId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM envia_material WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("material {id} not found")));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM envia_material")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
