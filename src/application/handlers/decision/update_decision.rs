//! UpdateDecisionHandler - Command handler for re-scoring a saved decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionDraft, DecisionError, DecisionReport};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Command to replace a decision's content with an edited draft.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub draft: DecisionDraft,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateDecisionResult {
    pub decision: Decision,
    pub report: DecisionReport,
}

/// Handler for updating decisions. The share slug and visibility are kept.
pub struct UpdateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<UpdateDecisionResult, DecisionError> {
        let mut decision = self
            .repository
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or_else(|| DecisionError::not_found(cmd.decision_id))?;

        decision.authorize(&cmd.user_id)?;
        decision.update_from_draft(cmd.draft)?;

        self.repository.update(&decision).await?;

        let report = decision.report();
        Ok(UpdateDecisionResult { decision, report })
    }
}
