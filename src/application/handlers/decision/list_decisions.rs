//! ListDecisionsHandler - Query handler for a user's saved decisions.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, OptionId, Timestamp, UserId};
use crate::ports::DecisionRepository;

/// Query for all decisions owned by a user.
#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub user_id: UserId,
}

/// Dashboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionSummary {
    pub id: DecisionId,
    pub title: String,
    pub recommended_option_id: Option<OptionId>,
    pub recommended_label: Option<String>,
    pub share_slug: Option<String>,
    pub is_public: bool,
    pub updated_at: Timestamp,
}

impl From<&Decision> for DecisionSummary {
    fn from(decision: &Decision) -> Self {
        let recommended = decision.recommended_option_id();
        Self {
            id: *decision.id(),
            title: decision.title().to_string(),
            recommended_option_id: recommended.cloned(),
            recommended_label: recommended.and_then(|id| {
                decision
                    .options()
                    .iter()
                    .find(|option| &option.id == id)
                    .map(|option| option.label.clone())
            }),
            share_slug: decision.share_slug().map(|slug| slug.to_string()),
            is_public: decision.is_public(),
            updated_at: *decision.updated_at(),
        }
    }
}

/// Handler for listing decisions, most recently updated first.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<DecisionSummary>, DecisionError> {
        let decisions = self.repository.list_by_user(&query.user_id).await?;
        Ok(decisions.iter().map(DecisionSummary::from).collect())
    }
}
