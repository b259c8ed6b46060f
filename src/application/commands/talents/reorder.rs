// src/application/commands/talents/reorder.rs
use std::sync::Arc;

use super::TalentCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ordering::{TalentOrdering, reorder},
    },
    domain::{
        ordering::ReorderItem,
        talent::{TalentId, TalentKind},
    },
};

pub struct ReorderTalentsCommand {
    pub kind: TalentKind,
    pub items: Vec<ReorderItem<i64>>,
}

impl TalentCommandService {
    /// Returns the number of rows whose `orden` was written.
    pub async fn reorder_talents(&self, command: ReorderTalentsCommand) -> ApplicationResult<usize> {
        if command.items.is_empty() {
            return Err(ApplicationError::validation("items must not be empty"));
        }
        let items = command
            .items
            .into_iter()
            .map(|item| -> ApplicationResult<_> {
                Ok(ReorderItem::new(TalentId::new(item.id)?, item.orden))
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let collection = TalentOrdering::new(Arc::clone(&self.write_repo), command.kind);
        Ok(reorder(&collection, items).await?)
    }
}
