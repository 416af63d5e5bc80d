//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - In-memory decision repository (tests, CLI)
//! - `postgres` - PostgreSQL decision repository
//! - `draft` - YAML draft files

pub mod draft;
pub mod postgres;
pub mod storage;

pub use draft::{read_draft_file, FileDraftStorage};
pub use postgres::PostgresDecisionRepository;
pub use storage::InMemoryDecisionRepository;
