// src/domain/talent/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::generate_unique_slug;
use crate::domain::talent::entity::TalentId;
use crate::domain::talent::kind::TalentKind;
use crate::domain::talent::repository::TalentReadRepository;

/// Domain service producing slugs that are unique within a talent table.
pub struct TalentSlugService {
    read_repo: Arc<dyn TalentReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl TalentSlugService {
    pub fn new(
        read_repo: Arc<dyn TalentReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        kind: TalentKind,
        nombre: &str,
        ignore_id: Option<TalentId>,
    ) -> DomainResult<String> {
        let base = self.generator.slugify(nombre);
        let existing = self
            .read_repo
            .slugs_with_prefix(kind, &base, ignore_id)
            .await?;

        Ok(generate_unique_slug(nombre, &existing, Some(&base)))
    }
}
