use super::{namespaced, KeyValueStore, StoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Store which is lost when the process exits
pub struct MemoryStore {
    namespace: String,
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_owned(),
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[serenity::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = namespaced(&self.namespace, key);
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let key = namespaced(&self.namespace, key);
        self.entries.write().await.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let key = namespaced(&self.namespace, key);
        Ok(self.entries.write().await.remove(&key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let store = MemoryStore::new("users");
        assert_eq!(store.get("1").await.unwrap(), None);

        store.set("1", "[\"10\"]".to_owned()).await.unwrap();
        assert_eq!(store.get("1").await.unwrap().as_deref(), Some("[\"10\"]"));

        assert!(store.delete("1").await.unwrap());
        assert!(!store.delete("1").await.unwrap());
        assert_eq!(store.get("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let store = MemoryStore::new("users");
        store.set("1", "a".to_owned()).await.unwrap();
        store.set("1", "b".to_owned()).await.unwrap();
        assert_eq!(store.get("1").await.unwrap().as_deref(), Some("b"));
    }
}
