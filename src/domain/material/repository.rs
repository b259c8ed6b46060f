// src/domain/material/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::material::entity::{MaterialId, MaterialSubmission, NewMaterialSubmission};
use async_trait::async_trait;

#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn insert(&self, submission: NewMaterialSubmission) -> DomainResult<MaterialSubmission>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<MaterialSubmission>>;
    async fn delete(&self, id: MaterialId) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
}
