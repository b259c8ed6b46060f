// src/domain/talent/kind.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Talent category. Each category is stored in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TalentKind {
    #[serde(rename = "actores")]
    Actores,
    #[serde(rename = "actrices")]
    Actrices,
    #[serde(rename = "talentos-sub-18")]
    TalentosSub18,
    #[serde(rename = "guionistas")]
    Guionistas,
    #[serde(rename = "directores")]
    Directores,
}

impl TalentKind {
    pub const ALL: [TalentKind; 5] = [
        TalentKind::Actores,
        TalentKind::Actrices,
        TalentKind::TalentosSub18,
        TalentKind::Guionistas,
        TalentKind::Directores,
    ];

    /// Segment used in URLs and request payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            TalentKind::Actores => "actores",
            TalentKind::Actrices => "actrices",
            TalentKind::TalentosSub18 => "talentos-sub-18",
            TalentKind::Guionistas => "guionistas",
            TalentKind::Directores => "directores",
        }
    }

    /// Backing table. The only place table names for talents come from.
    pub fn table_name(&self) -> &'static str {
        match self {
            TalentKind::Actores => "actores",
            TalentKind::Actrices => "actrices",
            TalentKind::TalentosSub18 => "talentos_sub_18",
            TalentKind::Guionistas => "guionistas",
            TalentKind::Directores => "directores",
        }
    }
}

impl fmt::Display for TalentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TalentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actores" => Ok(TalentKind::Actores),
            "actrices" => Ok(TalentKind::Actrices),
            "talentos-sub-18" => Ok(TalentKind::TalentosSub18),
            "guionistas" => Ok(TalentKind::Guionistas),
            "directores" => Ok(TalentKind::Directores),
            other => Err(DomainError::Validation(format!(
                "unknown talent type '{other}', expected one of: actores, actrices, talentos-sub-18, guionistas, directores"
            ))),
        }
    }
}
