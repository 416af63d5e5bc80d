//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DecisionSummary, DeleteDecisionCommand, DeleteDecisionHandler, GetSharedDecisionHandler,
    GetSharedDecisionQuery, ListDecisionsHandler, ListDecisionsQuery, SaveDecisionCommand,
    SaveDecisionHandler, SaveDecisionResult, SetVisibilityCommand, SetVisibilityHandler,
    SetVisibilityResult, SharedDecisionView, UpdateDecisionCommand, UpdateDecisionHandler,
    UpdateDecisionResult,
};
