//! Share slug errors.

use thiserror::Error;

use crate::ports::DecisionStoreError;

/// Failures while assigning a share slug.
#[derive(Debug, Error)]
pub enum ShareSlugError {
    /// Every candidate collided with an existing slug.
    #[error("no free share slug after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// The existence check or insert failed for a reason other than a collision.
    #[error(transparent)]
    Store(#[from] DecisionStoreError),
}
