use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{KeyValueStore, Namespace, StoreError};

/// One file per key under `<root>/<namespace>/`.
///
/// Writes go to a sibling temp file and are renamed into place, so a reader
/// sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str, namespace: Namespace) -> PathBuf {
        self.root
            .join(namespace.as_str())
            .join(format!("{}.json", sanitize_key(key)))
    }
}

/// Keys become file names; anything outside `[A-Za-z0-9_-]` is replaced.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str, namespace: Namespace) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key, namespace);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, namespace, e)),
        }
    }

    async fn set(&self, key: &str, value: &str, namespace: Namespace) -> Result<(), StoreError> {
        let path = self.path_for(key, namespace);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(key, namespace, e))?;
        }

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| StoreError::io(key, namespace, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(key, namespace, e))?;

        debug!(path = %path.display(), bytes = value.len(), "store write");
        Ok(())
    }

    async fn delete(&self, key: &str, namespace: Namespace) -> Result<(), StoreError> {
        let path = self.path_for(key, namespace);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, namespace, e)),
        }
    }
}
