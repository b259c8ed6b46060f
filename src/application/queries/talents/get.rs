use super::TalentQueryService;
use crate::{
    application::{
        dto::TalentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::talent::{TalentId, TalentKind},
};

/// Looks a talent up by slug, falling back to its numeric id so links
/// created before slugs existed keep working.
pub struct GetTalentQuery {
    pub kind: TalentKind,
    pub slug_or_id: String,
}

impl TalentQueryService {
    pub async fn get_talent(&self, query: GetTalentQuery) -> ApplicationResult<TalentDto> {
        let key = query.slug_or_id.trim();
        if let Some(talent) = self.read_repo.find_by_slug(query.kind, key).await? {
            return Ok(talent.into());
        }

        let id = key.parse::<i64>().ok().and_then(|raw| TalentId::new(raw).ok());
        let talent = match id {
            Some(id) => self.read_repo.find_by_id(query.kind, id).await?,
            None => None,
        };

        talent
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("talent '{key}' not found")))
    }
}
