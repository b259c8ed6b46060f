// src/domain/material/entity.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Applicants younger than this must name a responsible adult.
pub const ADULT_AGE: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub Uuid);

impl From<MaterialId> for Uuid {
    fn from(value: MaterialId) -> Self {
        value.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything an applicant tells about themselves in the "envía material"
/// form. Optional answers are `None`, never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApplicantProfile {
    pub nombre_completo: String,
    pub apellido: String,
    pub edad: i32,
    pub fecha_nacimiento: String,
    pub nombre_artistico: Option<String>,
    pub nombre_adulto_responsable: Option<String>,
    pub email: String,
    pub whatsapp: String,
    pub tik_tok: Option<String>,
    pub instagram: Option<String>,
    pub nacionalidad: String,
    pub residencia_actual: Option<String>,
    pub pasaporte: Option<String>,
    pub dni: Option<String>,
    pub licencia_conducir: Option<String>,
    pub altura: Option<String>,
    pub peso: Option<String>,
    pub contextura: Option<String>,
    pub color_pelo: Option<String>,
    pub color_ojos: Option<String>,
    pub talle_remera: Option<String>,
    pub pantalon: Option<String>,
    pub calzado: Option<String>,
    pub tatuajes: Option<String>,
    pub cicatrices: Option<String>,
    pub alergias: Option<String>,
    pub alimentacion: Option<String>,
    pub alimentacion_otros: Option<String>,
    pub hijos: Option<String>,
    pub obra_social: Option<String>,
    pub contacto_emergencia: Option<String>,
    pub instrumentos: Option<String>,
    pub canta: Option<String>,
    pub idiomas: Option<String>,
    pub acento_neutro: Option<String>,
    pub deportes: Option<String>,
    pub baila: Option<String>,
    pub otras_habilidades: Option<String>,
}

impl ApplicantProfile {
    pub fn is_minor(&self) -> bool {
        self.edad < ADULT_AGE
    }
}

#[derive(Debug, Clone)]
pub struct MaterialSubmission {
    pub id: MaterialId,
    pub profile: ApplicantProfile,
    pub reel_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub imagenes_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMaterialSubmission {
    pub profile: ApplicantProfile,
    pub reel_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub imagenes_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}
