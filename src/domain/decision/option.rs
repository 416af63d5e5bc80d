//! Options being compared within a decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, ValidationError};

/// Fewest options a decision can compare.
pub const MIN_OPTIONS: usize = 2;

/// Most options a decision can compare.
pub const MAX_OPTIONS: usize = 5;

/// A candidate choice being compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    pub label: String,
}

impl DecisionOption {
    /// Creates an option with a fresh id and a trimmed label.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the label is blank after trimming.
    pub fn new(label: &str) -> Result<Self, ValidationError> {
        Self::with_id(OptionId::generate(), label)
    }

    /// Creates an option with a caller-chosen id.
    pub fn with_id(id: OptionId, label: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("option_label"));
        }
        Ok(Self {
            id,
            label: label.to_string(),
        })
    }
}
