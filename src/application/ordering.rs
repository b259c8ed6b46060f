// src/application/ordering.rs
//! Persists a client-supplied ordering one row at a time.
//!
//! Writes are issued sequentially and are not wrapped in a transaction: when
//! an update fails the rows already written keep their new position and the
//! failure reports exactly which ids were applied.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::warn;

use crate::{
    application::error::ApplicationError,
    domain::{
        errors::{DomainError, DomainResult},
        ordering::{OrderedCollection, ReorderItem},
        slider::{SliderImageId, SliderRepository},
        talent::{TalentId, TalentKind, TalentWriteRepository},
    },
};

#[derive(Debug)]
pub struct ReorderFailure<Id> {
    pub collection: &'static str,
    pub failed: Id,
    pub applied: Vec<Id>,
    pub source: DomainError,
}

impl<Id: fmt::Display> fmt::Display for ReorderFailure<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to update orden of {} {} after {} applied: {}",
            self.collection,
            self.failed,
            self.applied.len(),
            self.source
        )
    }
}

impl<Id: fmt::Display> From<ReorderFailure<Id>> for ApplicationError {
    fn from(failure: ReorderFailure<Id>) -> Self {
        match failure.source {
            DomainError::NotFound(_) | DomainError::Validation(_) => {
                ApplicationError::Domain(failure.source)
            }
            _ => ApplicationError::infrastructure(failure.to_string()),
        }
    }
}

/// Applies each item's `orden` in list order and returns how many rows were
/// written. Stops at the first failing write.
pub async fn reorder<C>(
    collection: &C,
    items: Vec<ReorderItem<C::Id>>,
) -> Result<usize, ReorderFailure<C::Id>>
where
    C: OrderedCollection + ?Sized,
{
    let mut applied = Vec::with_capacity(items.len());
    for item in items {
        if let Err(source) = collection.set_orden(&item.id, item.orden).await {
            warn!(
                table = collection.name(),
                id = %item.id,
                applied = applied.len(),
                error = %source,
                "reorder stopped on failed update"
            );
            return Err(ReorderFailure {
                collection: collection.name(),
                failed: item.id,
                applied,
                source,
            });
        }
        applied.push(item.id);
    }
    Ok(applied.len())
}

/// Rows of one talent table.
pub struct TalentOrdering {
    repo: Arc<dyn TalentWriteRepository>,
    kind: TalentKind,
}

impl TalentOrdering {
    pub fn new(repo: Arc<dyn TalentWriteRepository>, kind: TalentKind) -> Self {
        Self { repo, kind }
    }
}

#[async_trait]
impl OrderedCollection for TalentOrdering {
    type Id = TalentId;

    fn name(&self) -> &'static str {
        self.kind.table_name()
    }

    async fn set_orden(&self, id: &TalentId, orden: i32) -> DomainResult<()> {
        self.repo.set_orden(self.kind, *id, orden).await
    }
}

pub struct SliderOrdering {
    repo: Arc<dyn SliderRepository>,
}

impl SliderOrdering {
    pub fn new(repo: Arc<dyn SliderRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl OrderedCollection for SliderOrdering {
    type Id = SliderImageId;

    fn name(&self) -> &'static str {
        "slider_imagenes"
    }

    async fn set_orden(&self, id: &SliderImageId, orden: i32) -> DomainResult<()> {
        self.repo.set_orden(*id, orden).await
    }
}
