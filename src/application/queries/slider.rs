use std::sync::Arc;

use crate::{
    application::{dto::SliderImageDto, error::ApplicationResult},
    domain::slider::SliderRepository,
};

pub struct SliderQueryService {
    repo: Arc<dyn SliderRepository>,
}

impl SliderQueryService {
    pub fn new(repo: Arc<dyn SliderRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_images(&self) -> ApplicationResult<Vec<SliderImageDto>> {
        let images = self.repo.list().await?;
        Ok(images.into_iter().map(Into::into).collect())
    }
}
