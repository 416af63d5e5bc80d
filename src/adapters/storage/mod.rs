//! In-memory adapters for testing and development.
//!
//! ```ignore
//! use adapters::storage::InMemoryDecisionRepository;
//!
//! let repo = Arc::new(InMemoryDecisionRepository::new());
//! ```

mod in_memory_decision_repository;

pub use in_memory_decision_repository::InMemoryDecisionRepository;
