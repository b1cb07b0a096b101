use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{KeyValueStore, Namespace, StoreError};

/// Process-local store. Clones share the same map, which is how tests put
/// two sessions on one "shared" backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<(Namespace, String), String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str, namespace: Namespace) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .read()
            .get(&(namespace, key.to_string()))
            .cloned())
    }

    async fn set(&self, key: &str, value: &str, namespace: Namespace) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert((namespace, key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str, namespace: Namespace) -> Result<(), StoreError> {
        self.entries.write().remove(&(namespace, key.to_string()));
        Ok(())
    }
}
