use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{domain::errors::StateError, ports::state::StateStore};

/// In-memory implementation of StateStore for testing and development.
/// State lives as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryStateStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, name: &str) -> Result<Option<String>, StateError> {
        Ok(self.data.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, value: &str) -> Result<(), StateError> {
        self.data
            .write()
            .await
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    async fn set_if_absent(&self, name: &str, value: &str) -> Result<String, StateError> {
        let mut data = self.data.write().await;
        Ok(data
            .entry(name.to_string())
            .or_insert_with(|| value.to_string())
            .clone())
    }

    async fn delete(&self, name: &str) -> Result<bool, StateError> {
        Ok(self.data.write().await.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.get("a").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        store.set("a", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_set_if_absent_keeps_first_value() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.set_if_absent("a", "first").await.unwrap(), "first");
        assert_eq!(store.set_if_absent("a", "second").await.unwrap(), "first");
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryStateStore::new();
        store.set("a", "1").await.unwrap();
        assert!(store.delete("a").await.unwrap());
        assert!(!store.delete("a").await.unwrap());
        assert_eq!(store.get("a").await.unwrap(), None);
    }
}
