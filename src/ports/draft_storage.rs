//! Draft Storage Port - Single-slot persistence of a user's unsaved draft.

use async_trait::async_trait;

use crate::domain::decision::DecisionDraft;
use crate::domain::foundation::UserId;

/// Errors that can occur during draft storage operations
#[derive(Debug, thiserror::Error)]
pub enum DraftStorageError {
    #[error("Failed to serialize draft: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize draft: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for saving, loading and clearing the working draft.
///
/// Each user has at most one draft; saving replaces it.
#[async_trait]
pub trait DraftStorage: Send + Sync {
    /// Save the user's draft, replacing any previous one.
    async fn save_draft(&self, user_id: &UserId, draft: &DecisionDraft) -> Result<(), DraftStorageError>;

    /// Load the user's draft, if one was saved.
    async fn load_draft(&self, user_id: &UserId) -> Result<Option<DecisionDraft>, DraftStorageError>;

    /// Remove the user's draft. Succeeds when none exists.
    async fn clear_draft(&self, user_id: &UserId) -> Result<(), DraftStorageError>;
}
