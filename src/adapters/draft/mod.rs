//! Draft Storage Adapters
//!
//! - **FileDraftStorage** - One YAML file per user

mod file_draft_storage;

pub use file_draft_storage::{read_draft_file, FileDraftStorage};
