use std::sync::Arc;

use crate::{
    application::{
        commands::{
            auth::AuthService, contacts::ContactCommandService, materials::MaterialCommandService,
            slider::SliderCommandService, talents::TalentCommandService,
        },
        ports::{auth::AuthProvider, storage::ObjectStorage, time::Clock, util::SlugGenerator},
        queries::{
            contacts::ContactQueryService, materials::MaterialQueryService,
            slider::SliderQueryService, stats::StatsQueryService, talents::TalentQueryService,
        },
    },
    domain::{
        contact::ContactRepository,
        material::MaterialRepository,
        slider::SliderRepository,
        talent::{TalentReadRepository, TalentWriteRepository, services::TalentSlugService},
    },
};

/// Repositories and adapters the services are built from.
pub struct ServiceDependencies {
    pub talent_write_repo: Arc<dyn TalentWriteRepository>,
    pub talent_read_repo: Arc<dyn TalentReadRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub material_repo: Arc<dyn MaterialRepository>,
    pub slider_repo: Arc<dyn SliderRepository>,
    pub storage: Arc<dyn ObjectStorage>,
    pub auth_provider: Arc<dyn AuthProvider>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub talent_commands: Arc<TalentCommandService>,
    pub talent_queries: Arc<TalentQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub material_commands: Arc<MaterialCommandService>,
    pub material_queries: Arc<MaterialQueryService>,
    pub slider_commands: Arc<SliderCommandService>,
    pub slider_queries: Arc<SliderQueryService>,
    pub stats_queries: Arc<StatsQueryService>,
    pub auth: Arc<AuthService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let slug_service = Arc::new(TalentSlugService::new(
            Arc::clone(&deps.talent_read_repo),
            Arc::clone(&deps.slugger),
        ));

        let talent_commands = Arc::new(TalentCommandService::new(
            Arc::clone(&deps.talent_write_repo),
            Arc::clone(&deps.talent_read_repo),
            slug_service,
            Arc::clone(&deps.storage),
            Arc::clone(&deps.clock),
        ));
        let talent_queries = Arc::new(TalentQueryService::new(Arc::clone(&deps.talent_read_repo)));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&deps.contact_repo),
            Arc::clone(&deps.clock),
        ));
        let contact_queries = Arc::new(ContactQueryService::new(Arc::clone(&deps.contact_repo)));

        let material_commands = Arc::new(MaterialCommandService::new(
            Arc::clone(&deps.material_repo),
            Arc::clone(&deps.storage),
            Arc::clone(&deps.clock),
        ));
        let material_queries =
            Arc::new(MaterialQueryService::new(Arc::clone(&deps.material_repo)));

        let slider_commands = Arc::new(SliderCommandService::new(
            Arc::clone(&deps.slider_repo),
            Arc::clone(&deps.storage),
            Arc::clone(&deps.clock),
        ));
        let slider_queries = Arc::new(SliderQueryService::new(Arc::clone(&deps.slider_repo)));

        let stats_queries = Arc::new(StatsQueryService::new(
            Arc::clone(&deps.talent_read_repo),
            Arc::clone(&deps.contact_repo),
            Arc::clone(&deps.material_repo),
        ));

        let auth = Arc::new(AuthService::new(deps.auth_provider));

        Self {
            talent_commands,
            talent_queries,
            contact_commands,
            contact_queries,
            material_commands,
            material_queries,
            slider_commands,
            slider_queries,
            stats_queries,
            auth,
        }
    }
}
