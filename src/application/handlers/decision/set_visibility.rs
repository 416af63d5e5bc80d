//! SetVisibilityHandler - Command handler for publishing and unpublishing.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::sharing::{ShareSlug, SlugGenerator};
use crate::ports::DecisionRepository;

/// Command to change whether a decision is publicly viewable.
#[derive(Debug, Clone)]
pub struct SetVisibilityCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub public: bool,
}

/// Result of a visibility change.
#[derive(Debug, Clone)]
pub struct SetVisibilityResult {
    pub decision: Decision,
    /// Slug to build the share link from; kept after unpublishing.
    pub share_slug: Option<ShareSlug>,
}

/// Handler for toggling decision visibility.
pub struct SetVisibilityHandler {
    repository: Arc<dyn DecisionRepository>,
    slug_generator: SlugGenerator,
}

impl SetVisibilityHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>, slug_generator: SlugGenerator) -> Self {
        Self {
            repository,
            slug_generator,
        }
    }

    pub async fn handle(&self, cmd: SetVisibilityCommand) -> Result<SetVisibilityResult, DecisionError> {
        let mut decision = self
            .repository
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or_else(|| DecisionError::not_found(cmd.decision_id))?;

        decision.authorize(&cmd.user_id)?;

        if cmd.public {
            if decision.share_slug().is_none() {
                let slug = self.unused_slug().await?;
                decision.assign_share_slug(slug)?;
            }
            decision.publish()?;
        } else {
            decision.unpublish();
        }

        self.repository.update(&decision).await?;

        tracing::info!(
            decision_id = %decision.id(),
            public = decision.is_public(),
            "decision visibility changed"
        );

        Ok(SetVisibilityResult {
            share_slug: decision.share_slug().cloned(),
            decision,
        })
    }

    async fn unused_slug(&self) -> Result<ShareSlug, DecisionError> {
        let repository = &self.repository;
        let slug = self
            .slug_generator
            .generate_unique(|candidate| {
                let repository = Arc::clone(repository);
                async move { repository.slug_exists(&candidate).await }
            })
            .await?;
        Ok(slug)
    }
}
