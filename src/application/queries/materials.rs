use std::sync::Arc;

use crate::{
    application::{dto::MaterialDto, error::ApplicationResult},
    domain::material::MaterialRepository,
};

pub struct MaterialQueryService {
    repo: Arc<dyn MaterialRepository>,
}

impl MaterialQueryService {
    pub fn new(repo: Arc<dyn MaterialRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_materials(&self) -> ApplicationResult<Vec<MaterialDto>> {
        let submissions = self.repo.list().await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }
}
