use super::TalentQueryService;
use crate::{
    application::{dto::TalentDto, error::ApplicationResult},
    domain::talent::TalentKind,
};

pub struct ListTalentsQuery {
    pub kind: TalentKind,
}

impl TalentQueryService {
    pub async fn list_talents(&self, query: ListTalentsQuery) -> ApplicationResult<Vec<TalentDto>> {
        let talents = self.read_repo.list(query.kind).await?;
        Ok(talents.into_iter().map(Into::into).collect())
    }
}
