//! Draft storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where unsaved drafts are kept
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DraftsConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/drafts")
}
