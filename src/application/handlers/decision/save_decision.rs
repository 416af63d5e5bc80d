//! SaveDecisionHandler - Command handler for saving a draft as a decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionDraft, DecisionError, DecisionReport};
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::sharing::SlugGenerator;
use crate::ports::DecisionRepository;

/// Command to save a draft.
#[derive(Debug, Clone)]
pub struct SaveDecisionCommand {
    pub user_id: UserId,
    pub draft: DecisionDraft,
    /// Publish immediately under a fresh share slug.
    pub publish: bool,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveDecisionResult {
    pub decision: Decision,
    pub report: DecisionReport,
}

/// Handler for saving decisions.
pub struct SaveDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
    slug_generator: SlugGenerator,
}

impl SaveDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>, slug_generator: SlugGenerator) -> Self {
        Self {
            repository,
            slug_generator,
        }
    }

    pub async fn handle(&self, cmd: SaveDecisionCommand) -> Result<SaveDecisionResult, DecisionError> {
        // 1. Validate, normalize and score
        let decision = Decision::from_draft(DecisionId::new(), cmd.user_id, cmd.draft)?;

        // 2. Persist, claiming a slug when publishing
        let decision = if cmd.publish {
            self.insert_published(decision).await?
        } else {
            self.repository.insert(&decision).await?;
            decision
        };

        tracing::info!(
            decision_id = %decision.id(),
            public = decision.is_public(),
            "decision saved"
        );

        let report = decision.report();
        Ok(SaveDecisionResult { decision, report })
    }

    async fn insert_published(&self, decision: Decision) -> Result<Decision, DecisionError> {
        let repository = &self.repository;
        let stored = self
            .slug_generator
            .insert_with_retry(|slug| {
                let repository = Arc::clone(repository);
                let mut candidate = decision.clone();
                let shared = candidate
                    .assign_share_slug(slug)
                    .and_then(|()| candidate.publish());
                async move {
                    if let Err(err) = shared {
                        return Ok(Err(err));
                    }
                    match repository.insert(&candidate).await {
                        Ok(()) => Ok(Ok(candidate)),
                        Err(err) => Err(err),
                    }
                }
            })
            .await?;

        Ok(stored?)
    }
}
