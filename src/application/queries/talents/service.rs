use std::sync::Arc;

use crate::domain::talent::TalentReadRepository;

pub struct TalentQueryService {
    pub(super) read_repo: Arc<dyn TalentReadRepository>,
}

impl TalentQueryService {
    pub fn new(read_repo: Arc<dyn TalentReadRepository>) -> Self {
        Self { read_repo }
    }
}
