//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the decision helper domain.

mod errors;
mod ids;
mod score;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, DecisionId, OptionId, UserId};
pub use score::Score;
pub use timestamp::Timestamp;
pub use weight::Weight;
