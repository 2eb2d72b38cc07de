//! Disk-backed store.
//!
//! The whole store is one JSON object (`key → serialized value`) kept in
//! memory and rewritten on every commit. Writes go to a sibling temp file
//! that is then renamed over the original, so a multi-key commit is either
//! fully on disk or not at all.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError, apply_within_quota};

/// A store persisted as a single JSON document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    quota: Option<usize>,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read and
    /// `StoreError::Serialization` if it is not a JSON object of strings.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>, quota: Option<usize>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Store file does not exist yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(keys = entries.len(), "Opened file store");
        Ok(Self {
            path,
            quota,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(&self, updates: Vec<(String, Option<String>)>) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let next = apply_within_quota(&entries, updates, self.quota)?;
        self.write(&next).await?;
        *entries = next;
        Ok(())
    }

    /// Write the document through a temp file and rename it into place.
    async fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document = serde_json::to_vec_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, document).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.commit(vec![(key.to_owned(), Some(value))]).await
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        let updates = entries.into_iter().map(|(k, v)| (k, Some(v))).collect();
        self.commit(updates).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.commit(vec![(key.to_owned(), None)]).await
    }
}
