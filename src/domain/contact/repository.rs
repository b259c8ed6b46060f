// src/domain/contact/repository.rs
use crate::domain::contact::entity::{Contact, ContactId, NewContact};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Contact>>;
    async fn delete(&self, id: ContactId) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
}
