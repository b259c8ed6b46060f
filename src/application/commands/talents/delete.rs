// src/application/commands/talents/delete.rs
use super::{TalentCommandService, talent_id};
use crate::{application::error::ApplicationResult, domain::talent::TalentKind};

pub struct DeleteTalentCommand {
    pub kind: TalentKind,
    pub id: i64,
}

impl TalentCommandService {
    /// Removes the row only; stored images stay in the bucket.
    pub async fn delete_talent(&self, command: DeleteTalentCommand) -> ApplicationResult<()> {
        let id = talent_id(command.id)?;
        self.write_repo.delete(command.kind, id).await?;
        Ok(())
    }
}
