//! In-Memory Decision Repository Adapter
//!
//! Stores decisions in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::sharing::ShareSlug;
use crate::ports::{DecisionRepository, DecisionStoreError, SHARE_SLUG_CONSTRAINT};

const PRIMARY_KEY_CONSTRAINT: &str = "decisions_pkey";

/// In-memory storage for decisions
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionRepository {
    decisions: Arc<RwLock<HashMap<DecisionId, Decision>>>,
}

impl InMemoryDecisionRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored decisions
    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }

    /// Claims `slug` for `owner`, failing if another decision holds it.
    fn check_slug(
        decisions: &HashMap<DecisionId, Decision>,
        owner: &DecisionId,
        slug: Option<&ShareSlug>,
    ) -> Result<(), DecisionStoreError> {
        let Some(slug) = slug else {
            return Ok(());
        };
        let taken = decisions
            .values()
            .any(|other| other.id() != owner && other.share_slug() == Some(slug));
        if taken {
            return Err(DecisionStoreError::UniquenessConflict {
                constraint: SHARE_SLUG_CONSTRAINT.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn insert(&self, decision: &Decision) -> Result<(), DecisionStoreError> {
        let mut decisions = self.decisions.write().await;
        if decisions.contains_key(decision.id()) {
            return Err(DecisionStoreError::UniquenessConflict {
                constraint: PRIMARY_KEY_CONSTRAINT.to_string(),
            });
        }
        Self::check_slug(&decisions, decision.id(), decision.share_slug())?;
        decisions.insert(*decision.id(), decision.clone());
        Ok(())
    }

    async fn update(&self, decision: &Decision) -> Result<(), DecisionStoreError> {
        let mut decisions = self.decisions.write().await;
        if !decisions.contains_key(decision.id()) {
            return Err(DecisionStoreError::NotFound(*decision.id()));
        }
        Self::check_slug(&decisions, decision.id(), decision.share_slug())?;
        decisions.insert(*decision.id(), decision.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DecisionStoreError> {
        Ok(self.decisions.read().await.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &ShareSlug) -> Result<Option<Decision>, DecisionStoreError> {
        let decisions = self.decisions.read().await;
        Ok(decisions
            .values()
            .find(|decision| decision.share_slug() == Some(slug))
            .cloned())
    }

    async fn slug_exists(&self, slug: &ShareSlug) -> Result<bool, DecisionStoreError> {
        let decisions = self.decisions.read().await;
        Ok(decisions
            .values()
            .any(|decision| decision.share_slug() == Some(slug)))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Decision>, DecisionStoreError> {
        let decisions = self.decisions.read().await;
        let mut owned: Vec<Decision> = decisions
            .values()
            .filter(|decision| decision.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DecisionStoreError> {
        self.decisions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(DecisionStoreError::NotFound(*id))
    }
}
