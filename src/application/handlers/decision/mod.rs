//! Decision command and query handlers.

mod delete_decision;
mod get_shared_decision;
mod list_decisions;
mod save_decision;
mod set_visibility;
mod update_decision;

pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use get_shared_decision::{GetSharedDecisionHandler, GetSharedDecisionQuery, SharedDecisionView};
pub use list_decisions::{DecisionSummary, ListDecisionsHandler, ListDecisionsQuery};
pub use save_decision::{SaveDecisionCommand, SaveDecisionHandler, SaveDecisionResult};
pub use set_visibility::{SetVisibilityCommand, SetVisibilityHandler, SetVisibilityResult};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler, UpdateDecisionResult};
