// src/domain/ordering.rs
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::DomainResult;

/// Position assigned to a row of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReorderItem<Id> {
    pub id: Id,
    pub orden: i32,
}

impl<Id> ReorderItem<Id> {
    pub fn new(id: Id, orden: i32) -> Self {
        Self { id, orden }
    }
}

/// Turns a plain list of ids into dense zero-based positions.
pub fn positions_from_ids<Id>(ids: Vec<Id>) -> Vec<ReorderItem<Id>> {
    ids.into_iter()
        .zip(0..)
        .map(|(id, orden)| ReorderItem::new(id, orden))
        .collect()
}

/// `orden` for a row appended after the current maximum. Saturates at
/// `i32::MAX`.
pub fn next_orden(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |max| max.saturating_add(1))
}

/// A table whose rows carry an `orden` column that can be rewritten one row
/// at a time.
#[async_trait]
pub trait OrderedCollection: Send + Sync {
    type Id: Clone + std::fmt::Display + Send + Sync;

    fn name(&self) -> &'static str;

    async fn set_orden(&self, id: &Self::Id, orden: i32) -> DomainResult<()>;
}
