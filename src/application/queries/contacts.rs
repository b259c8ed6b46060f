use std::sync::Arc;

use crate::{
    application::{dto::ContactDto, error::ApplicationResult},
    domain::contact::ContactRepository,
};

pub struct ContactQueryService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactQueryService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Newest first.
    pub async fn list_contacts(&self) -> ApplicationResult<Vec<ContactDto>> {
        let contacts = self.repo.list().await?;
        Ok(contacts.into_iter().map(Into::into).collect())
    }
}
