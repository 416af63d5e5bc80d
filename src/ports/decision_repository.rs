//! Decision repository port.
//!
//! Defines the contract for persisting and retrieving Decision aggregates.
//!
//! # Design
//!
//! - **Slug uniqueness is enforced by storage**: `insert` reports a taken
//!   slug as `UniquenessConflict` so callers can retry with a new one
//! - **User-scoped listing**: dashboard queries are by `user_id`

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::sharing::ShareSlug;

/// Name of the unique constraint on `decisions.share_slug`.
pub const SHARE_SLUG_CONSTRAINT: &str = "decisions_share_slug_key";

/// Errors reported by decision storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionStoreError {
    /// A unique constraint was violated; `constraint` names which one.
    #[error("Unique constraint violated: {constraint}")]
    UniquenessConflict { constraint: String },

    #[error("Decision not found: {0}")]
    NotFound(DecisionId),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to (de)serialize decision: {0}")]
    Serialization(String),
}

impl DecisionStoreError {
    /// Returns true for the conflict the slug retry loop recovers from.
    ///
    /// Only a clash on the share slug qualifies; a fresh slug cannot fix a
    /// duplicate id or any other constraint.
    pub fn is_slug_conflict(&self) -> bool {
        matches!(
            self,
            DecisionStoreError::UniquenessConflict { constraint }
                if constraint == SHARE_SLUG_CONSTRAINT
        )
    }
}

/// Repository port for Decision aggregate persistence.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a new decision.
    ///
    /// # Errors
    ///
    /// - `UniquenessConflict` naming `SHARE_SLUG_CONSTRAINT` if its share
    ///   slug is already taken, or another constraint for a duplicate id
    /// - `Database` on persistence failure
    async fn insert(&self, decision: &Decision) -> Result<(), DecisionStoreError>;

    /// Update an existing decision.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the decision doesn't exist
    /// - `UniquenessConflict` if a newly assigned slug is taken
    async fn update(&self, decision: &Decision) -> Result<(), DecisionStoreError>;

    /// Find a decision by its ID.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DecisionStoreError>;

    /// Find a decision by share slug, regardless of visibility.
    async fn find_by_slug(&self, slug: &ShareSlug) -> Result<Option<Decision>, DecisionStoreError>;

    /// Check whether any decision already uses `slug`.
    async fn slug_exists(&self, slug: &ShareSlug) -> Result<bool, DecisionStoreError>;

    /// Find all decisions owned by a user, most recently updated first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Decision>, DecisionStoreError>;

    /// Delete a decision.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the decision doesn't exist
    async fn delete(&self, id: &DecisionId) -> Result<(), DecisionStoreError>;
}
