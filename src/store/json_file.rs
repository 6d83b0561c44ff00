use super::{namespaced, KeyValueStore, StoreError};
use crate::log_internal;
use std::{collections::HashMap, io::ErrorKind, path::PathBuf};
use tokio::sync::RwLock;

/// Store which persists across sessions in a single JSON file.
///
/// The whole map is held in memory and the file is rewritten on every change.  Writes go to a
/// temporary file first which is then renamed over the target, so a crash mid-write never leaves
/// a truncated file behind.
pub struct JsonFileStore {
    path: PathBuf,
    namespace: String,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    pub async fn open(path: PathBuf, namespace: &str) -> Result<Self, StoreError> {
        let entries = match tokio::fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        log_internal!(
            "Opened store at `{}` with {} entries",
            path.to_string_lossy(),
            entries.len()
        );

        Ok(Self {
            path,
            namespace: namespace.to_owned(),
            entries: RwLock::new(entries),
        })
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.path.with_extension("json.new");
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}

#[serenity::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = namespaced(&self.namespace, key);
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let key = namespaced(&self.namespace, key);
        // Hold the write lock across the save so file writes are serialized.  Readers only see
        // the new value once it is on disk.
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        updated.insert(key, value);
        self.save(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let key = namespaced(&self.namespace, key);
        let mut entries = self.entries.write().await;
        let Some(old) = entries.remove(&key) else {
            return Ok(false);
        };
        if let Err(e) = self.save(&entries).await {
            entries.insert(key, old);
            return Err(e);
        }
        Ok(true)
    }
}
