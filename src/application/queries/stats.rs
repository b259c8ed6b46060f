use std::sync::Arc;

use crate::{
    application::{dto::TalentStatsDto, error::ApplicationResult},
    domain::{
        contact::ContactRepository,
        material::MaterialRepository,
        talent::{TalentKind, TalentReadRepository},
    },
};

pub struct StatsQueryService {
    talents: Arc<dyn TalentReadRepository>,
    contacts: Arc<dyn ContactRepository>,
    materials: Arc<dyn MaterialRepository>,
}

impl StatsQueryService {
    pub fn new(
        talents: Arc<dyn TalentReadRepository>,
        contacts: Arc<dyn ContactRepository>,
        materials: Arc<dyn MaterialRepository>,
    ) -> Self {
        Self {
            talents,
            contacts,
            materials,
        }
    }

    /// Counts every table concurrently.
    pub async fn dashboard_stats(&self) -> ApplicationResult<TalentStatsDto> {
        let (actores, actrices, guionistas, directores, talentos_sub18, material, propuestas) =
            tokio::try_join!(
                self.talents.count(TalentKind::Actores),
                self.talents.count(TalentKind::Actrices),
                self.talents.count(TalentKind::Guionistas),
                self.talents.count(TalentKind::Directores),
                self.talents.count(TalentKind::TalentosSub18),
                self.materials.count(),
                self.contacts.count(),
            )?;

        Ok(TalentStatsDto {
            actores,
            actrices,
            guionistas,
            directores,
            talentos_sub18,
            material,
            propuestas,
        })
    }
}
