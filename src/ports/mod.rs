//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Saved decisions and share slug lookup
//! - `DraftStorage` - The user's single unsaved draft

mod decision_repository;
mod draft_storage;

pub use decision_repository::{DecisionRepository, DecisionStoreError, SHARE_SLUG_CONSTRAINT};
pub use draft_storage::{DraftStorage, DraftStorageError};
