// src/application/commands/talents/mod.rs
mod create;
mod delete;
mod reorder;
mod service;
mod update;

pub use create::CreateTalentCommand;
pub use delete::DeleteTalentCommand;
pub use reorder::ReorderTalentsCommand;
pub use service::TalentCommandService;
pub use update::UpdateTalentCommand;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::talent::TalentId,
};

/// Ids that cannot name a row are reported as a missing talent.
fn talent_id(raw: i64) -> ApplicationResult<TalentId> {
    TalentId::new(raw).map_err(|_| ApplicationError::not_found(format!("talent {raw} not found")))
}
