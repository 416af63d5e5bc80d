//! DeleteDecisionHandler - Command handler for deleting a decision.

use std::sync::Arc;

use crate::domain::decision::DecisionError;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Command to delete a decision.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
}

/// Handler for deleting decisions. Only the owner may delete.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DecisionError> {
        let decision = self
            .repository
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or_else(|| DecisionError::not_found(cmd.decision_id))?;

        decision.authorize(&cmd.user_id)?;
        self.repository.delete(&cmd.decision_id).await?;

        tracing::info!(decision_id = %cmd.decision_id, "decision deleted");
        Ok(())
    }
}
