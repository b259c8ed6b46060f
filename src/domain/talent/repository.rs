// src/domain/talent/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::talent::entity::{NewTalent, Talent, TalentId, TalentUpdate};
use crate::domain::talent::kind::TalentKind;
use async_trait::async_trait;

#[async_trait]
pub trait TalentWriteRepository: Send + Sync {
    async fn insert(&self, kind: TalentKind, talent: NewTalent) -> DomainResult<Talent>;
    async fn update(&self, kind: TalentKind, update: TalentUpdate) -> DomainResult<Talent>;
    async fn delete(&self, kind: TalentKind, id: TalentId) -> DomainResult<()>;
    async fn set_orden(&self, kind: TalentKind, id: TalentId, orden: i32) -> DomainResult<()>;
}

#[async_trait]
pub trait TalentReadRepository: Send + Sync {
    /// Rows ordered by `orden`, then `created_at`, both ascending.
    async fn list(&self, kind: TalentKind) -> DomainResult<Vec<Talent>>;
    async fn find_by_id(&self, kind: TalentKind, id: TalentId) -> DomainResult<Option<Talent>>;
    async fn find_by_slug(&self, kind: TalentKind, slug: &str) -> DomainResult<Option<Talent>>;
    /// Slugs starting with `prefix`, skipping the row `exclude` when given.
    async fn slugs_with_prefix(
        &self,
        kind: TalentKind,
        prefix: &str,
        exclude: Option<TalentId>,
    ) -> DomainResult<Vec<String>>;
    async fn max_orden(&self, kind: TalentKind) -> DomainResult<Option<i32>>;
    async fn count(&self, kind: TalentKind) -> DomainResult<u64>;
}
