//! Decision-specific error types.

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, ValidationError};
use crate::domain::sharing::ShareSlugError;
use crate::ports::DecisionStoreError;

/// Decision-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Decision was not found.
    NotFound(DecisionId),
    /// No public decision is shared under this slug.
    NotShared(String),
    /// User does not own the decision.
    Forbidden,
    /// Operation is not allowed in the current state.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Every generated share slug collided.
    SlugRetriesExhausted { attempts: u32 },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DecisionError {
    pub fn not_found(id: DecisionId) -> Self {
        DecisionError::NotFound(id)
    }
    pub fn not_shared(slug: impl Into<String>) -> Self {
        DecisionError::NotShared(slug.into())
    }
    pub fn forbidden() -> Self {
        DecisionError::Forbidden
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        DecisionError::InvalidState(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DecisionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound(_) => ErrorCode::DecisionNotFound,
            DecisionError::NotShared(_) => ErrorCode::DecisionNotPublic,
            DecisionError::Forbidden => ErrorCode::Forbidden,
            DecisionError::InvalidState(_) => ErrorCode::SlugAlreadyAssigned,
            DecisionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DecisionError::SlugRetriesExhausted { .. } => ErrorCode::SlugRetriesExhausted,
            DecisionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DecisionError::NotFound(id) => format!("Decision not found: {}", id),
            DecisionError::NotShared(slug) => format!("No shared decision for '{}'", slug),
            DecisionError::Forbidden => "Permission denied".to_string(),
            DecisionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            DecisionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DecisionError::SlugRetriesExhausted { attempts } => {
                format!("Could not find a free share slug after {} attempts", attempts)
            }
            DecisionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DecisionError {}

impl From<ValidationError> for DecisionError {
    fn from(err: ValidationError) -> Self {
        DecisionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DecisionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => DecisionError::Forbidden,
            ErrorCode::SlugAlreadyAssigned | ErrorCode::DecisionNotPublic => {
                DecisionError::InvalidState(err.message)
            }
            ErrorCode::ValidationFailed
            | ErrorCode::OptionNotFound
            | ErrorCode::CriterionNotFound => DecisionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DecisionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<DecisionStoreError> for DecisionError {
    fn from(err: DecisionStoreError) -> Self {
        match err {
            DecisionStoreError::NotFound(id) => DecisionError::NotFound(id),
            other => DecisionError::Infrastructure(other.to_string()),
        }
    }
}

impl From<ShareSlugError> for DecisionError {
    fn from(err: ShareSlugError) -> Self {
        match err {
            ShareSlugError::ExhaustedRetries { attempts } => {
                DecisionError::SlugRetriesExhausted { attempts }
            }
            ShareSlugError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_slug_error_is_preserved() {
        let err: DecisionError = ShareSlugError::ExhaustedRetries { attempts: 6 }.into();
        assert_eq!(err, DecisionError::SlugRetriesExhausted { attempts: 6 });
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let id = DecisionId::new();
        let err: DecisionError = DecisionStoreError::NotFound(id).into();
        assert_eq!(err, DecisionError::NotFound(id));
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: DecisionError = ValidationError::empty_field("title").into();
        assert_eq!(
            err,
            DecisionError::validation("title", "Field 'title' cannot be empty")
        );
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn forbidden_domain_error_maps_to_forbidden() {
        let err: DecisionError = DomainError::new(ErrorCode::Forbidden, "nope").into();
        assert_eq!(err, DecisionError::Forbidden);
    }

    #[test]
    fn database_domain_error_maps_to_infrastructure() {
        let err: DecisionError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert!(matches!(err, DecisionError::Infrastructure(_)));
    }

    #[test]
    fn exhausted_slugs_report_attempts() {
        let err = DecisionError::SlugRetriesExhausted { attempts: 6 };
        assert_eq!(err.code(), ErrorCode::SlugRetriesExhausted);
        assert!(err.message().contains('6'));
    }
}
