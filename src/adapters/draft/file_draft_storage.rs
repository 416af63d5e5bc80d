//! File-based Draft Storage Adapter
//!
//! Stores each user's working draft as a YAML file named after the
//! percent-encoded user id.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::decision::DecisionDraft;
use crate::domain::foundation::UserId;
use crate::ports::{DraftStorage, DraftStorageError};

/// File-based storage for unsaved drafts
#[derive(Debug, Clone)]
pub struct FileDraftStorage {
    base_path: PathBuf,
}

impl FileDraftStorage {
    /// Create a new draft storage rooted at `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of a user's draft file.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are written as `%XX`, so ids cannot
    /// escape the base directory and distinct ids never share a file.
    fn draft_path(&self, user_id: &UserId) -> PathBuf {
        let mut file_stem = String::with_capacity(user_id.as_str().len());
        for byte in user_id.as_str().bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                file_stem.push(char::from(byte));
            } else {
                file_stem.push_str(&format!("%{:02X}", byte));
            }
        }
        self.base_path.join(format!("{}.yaml", file_stem))
    }
}

/// Reads a draft from any YAML file and normalizes its scores.
pub async fn read_draft_file(path: impl AsRef<Path>) -> Result<DecisionDraft, DraftStorageError> {
    let yaml = fs::read_to_string(path.as_ref())
        .await
        .map_err(|e| DraftStorageError::IoError(e.to_string()))?;
    let draft: DecisionDraft = serde_yaml::from_str(&yaml)
        .map_err(|e| DraftStorageError::DeserializationFailed(e.to_string()))?;
    Ok(draft.normalized())
}

#[async_trait]
impl DraftStorage for FileDraftStorage {
    async fn save_draft(&self, user_id: &UserId, draft: &DecisionDraft) -> Result<(), DraftStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DraftStorageError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(draft)
            .map_err(|e| DraftStorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.draft_path(user_id), yaml)
            .await
            .map_err(|e| DraftStorageError::IoError(e.to_string()))
    }

    async fn load_draft(&self, user_id: &UserId) -> Result<Option<DecisionDraft>, DraftStorageError> {
        let path = self.draft_path(user_id);
        if !path.exists() {
            return Ok(None);
        }
        read_draft_file(&path).await.map(Some)
    }

    async fn clear_draft(&self, user_id: &UserId) -> Result<(), DraftStorageError> {
        match fs::remove_file(self.draft_path(user_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftStorageError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionOption;
    use tempfile::TempDir;

    fn user() -> UserId {
        UserId::new("user-42").unwrap()
    }

    fn sample_draft() -> DecisionDraft {
        let options = vec![
            DecisionOption::new("집에서 쉬기").unwrap(),
            DecisionOption::new("친구 만나기").unwrap(),
        ];
        DecisionDraft::new(options, "피곤해").with_title("금요일 저녁")
    }

    #[tokio::test]
    async fn save_then_load_returns_same_draft() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDraftStorage::new(temp_dir.path());
        let draft = sample_draft();

        storage.save_draft(&user(), &draft).await.unwrap();
        let loaded = storage.load_draft(&user()).await.unwrap();

        assert_eq!(loaded, Some(draft));
    }

    #[tokio::test]
    async fn load_without_draft_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDraftStorage::new(temp_dir.path());
        assert_eq!(storage.load_draft(&user()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_removes_draft_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDraftStorage::new(temp_dir.path());
        storage.save_draft(&user(), &sample_draft()).await.unwrap();

        storage.clear_draft(&user()).await.unwrap();
        storage.clear_draft(&user()).await.unwrap();
        assert_eq!(storage.load_draft(&user()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn user_ids_cannot_escape_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDraftStorage::new(temp_dir.path());
        let sneaky = UserId::new("../../etc/passwd").unwrap();

        let path = storage.draft_path(&sneaky);
        assert_eq!(path.parent(), Some(temp_dir.path()));
    }

    #[tokio::test]
    async fn similar_user_ids_keep_separate_drafts() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDraftStorage::new(temp_dir.path());
        let alice = UserId::new("alice@example.com").unwrap();
        let mallory = UserId::new("alice_example_com").unwrap();

        storage
            .save_draft(&alice, &sample_draft().with_title("alice only"))
            .await
            .unwrap();

        assert_ne!(storage.draft_path(&alice), storage.draft_path(&mallory));
        assert_eq!(storage.load_draft(&mallory).await.unwrap(), None);
        let loaded = storage.load_draft(&alice).await.unwrap().unwrap();
        assert_eq!(loaded.title, "alice only");
    }

    #[test]
    fn escape_character_is_itself_encoded() {
        let storage = FileDraftStorage::new("/drafts");
        let literal = UserId::new("a%40b").unwrap();
        let encoded = UserId::new("a@b").unwrap();

        assert_eq!(
            storage.draft_path(&encoded),
            PathBuf::from("/drafts/a%40b.yaml")
        );
        assert_eq!(
            storage.draft_path(&literal),
            PathBuf::from("/drafts/a%2540b.yaml")
        );
    }

    #[tokio::test]
    async fn read_draft_file_fills_missing_scores() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("draft.yaml");
        let yaml = r#"
title: 저녁 메뉴
options:
  - { id: a, label: 라면 }
  - { id: b, label: 샐러드 }
criteria:
  - { id: cost, label: 비용, weight: 4, enabled: true }
  - { id: time, label: 시간, weight: 3, enabled: true }
scores:
  a: { cost: 5 }
"#;
        tokio::fs::write(&path, yaml).await.unwrap();

        let draft = read_draft_file(&path).await.unwrap();
        assert_eq!(draft.scores.value_or_zero("a", "cost"), 5);
        assert_eq!(draft.scores.value_or_zero("a", "time"), 3);
        assert_eq!(draft.scores.value_or_zero("b", "cost"), 3);
        assert_eq!(draft.evaluate().totals.get("a"), Some(&29));
    }

    #[tokio::test]
    async fn malformed_yaml_is_a_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        tokio::fs::write(&path, "options: [").await.unwrap();

        assert!(matches!(
            read_draft_file(&path).await,
            Err(DraftStorageError::DeserializationFailed(_))
        ));
    }
}
