//! Key-value backends for persisted bot data.
//!
//! Every backend stores opaque string values under namespaced string keys.  What the values mean
//! is up to the caller, see `crate::preferences`.

use crate::config::{Backend, Database};
use thiserror::Error;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid argument `{0}`")]
    InvalidArgument(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[serenity::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Insert or overwrite the value under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Remove `key`.  Returns whether it was present.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}

/// Open the backend described by the `[database]` configuration section.
pub async fn open(cfg: &Database) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match cfg.backend {
        Backend::Memory => Box::new(MemoryStore::new(cfg.namespace())),
        Backend::Json => {
            let path = cfg.path()?;
            Box::new(JsonFileStore::open(path, cfg.namespace()).await?)
        }
    };

    Ok(store)
}

/// Keys from several logical tables can share one backend.  Prefix them with their table name.
fn namespaced(namespace: &str, key: &str) -> String {
    format!("{}:{}", namespace, key)
}
