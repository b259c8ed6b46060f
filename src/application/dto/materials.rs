use crate::domain::material::{ApplicantProfile, MaterialSubmission};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Stored applicant row. Profile columns are flattened next to the file
/// references, matching the table layout.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    pub reel_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub imagenes_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MaterialSubmission> for MaterialDto {
    fn from(submission: MaterialSubmission) -> Self {
        Self {
            id: submission.id.into(),
            profile: submission.profile,
            reel_url: submission.reel_url,
            cv_pdf_url: submission.cv_pdf_url,
            imagenes_urls: submission.imagenes_urls,
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}
