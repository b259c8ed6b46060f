use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalentStatsDto {
    pub actores: u64,
    pub actrices: u64,
    pub guionistas: u64,
    pub directores: u64,
    pub talentos_sub18: u64,
    pub material: u64,
    pub propuestas: u64,
}
