//! Decision module - Options, criteria, scores and the Decision aggregate.

mod aggregate;
mod criterion;
mod draft;
mod errors;
mod option;
mod report;
mod score_matrix;

pub use aggregate::Decision;
pub use criterion::{base_criteria, enabled_criteria, Criterion, MIN_ENABLED_CRITERIA};
pub use draft::{DecisionDraft, MAX_CONTEXT_LENGTH, MAX_OPTION_LABEL_LENGTH, MAX_TITLE_LENGTH};
pub use errors::DecisionError;
pub use option::{DecisionOption, MAX_OPTIONS, MIN_OPTIONS};
pub use report::{DecisionReport, OptionSummary};
pub use score_matrix::ScoreMatrix;
