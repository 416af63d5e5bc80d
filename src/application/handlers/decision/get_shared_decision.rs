//! GetSharedDecisionHandler - Query handler for the public share page.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, DecisionReport};
use crate::domain::sharing::ShareSlug;
use crate::ports::DecisionRepository;

/// Query for a decision by its share slug.
#[derive(Debug, Clone)]
pub struct GetSharedDecisionQuery {
    pub slug: String,
}

/// Read-only view of a shared decision.
#[derive(Debug, Clone)]
pub struct SharedDecisionView {
    pub decision: Decision,
    pub report: DecisionReport,
}

/// Handler for viewing shared decisions without authentication.
pub struct GetSharedDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetSharedDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Private, unknown and malformed slugs all yield `NotShared`, so a
    /// caller cannot tell them apart.
    pub async fn handle(&self, query: GetSharedDecisionQuery) -> Result<SharedDecisionView, DecisionError> {
        let Ok(slug) = ShareSlug::parse(query.slug.trim()) else {
            return Err(DecisionError::not_shared(query.slug));
        };

        let decision = self
            .repository
            .find_by_slug(&slug)
            .await?
            .filter(Decision::is_public)
            .ok_or_else(|| DecisionError::not_shared(slug.as_str()))?;

        let report = decision.report();
        Ok(SharedDecisionView { decision, report })
    }
}
