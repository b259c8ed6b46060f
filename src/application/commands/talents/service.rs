// src/application/commands/talents/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{storage::ObjectStorage, time::Clock},
    domain::talent::{
        TalentReadRepository, TalentWriteRepository, services::TalentSlugService,
    },
};

pub struct TalentCommandService {
    pub(super) write_repo: Arc<dyn TalentWriteRepository>,
    pub(super) read_repo: Arc<dyn TalentReadRepository>,
    pub(super) slug_service: Arc<TalentSlugService>,
    pub(super) storage: Arc<dyn ObjectStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TalentCommandService {
    pub fn new(
        write_repo: Arc<dyn TalentWriteRepository>,
        read_repo: Arc<dyn TalentReadRepository>,
        slug_service: Arc<TalentSlugService>,
        storage: Arc<dyn ObjectStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            storage,
            clock,
        }
    }
}
