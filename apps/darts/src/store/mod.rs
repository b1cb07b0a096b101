//! Key-value persistence collaborator.
//!
//! One match lives under one key per namespace. Implementations give atomic
//! per-key `get`/`set`/`delete` and nothing more: no transactions, no
//! read-modify-write, last write wins.

mod file;
mod memory;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::InMemoryStore;

/// Storage partition: a device-local match or one shared between clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Local,
    Shared,
}

impl Namespace {
    pub fn from_shared(shared: bool) -> Self {
        if shared {
            Namespace::Shared
        } else {
            Namespace::Local
        }
    }

    pub fn is_shared(self) -> bool {
        matches!(self, Namespace::Shared)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Local => "local",
            Namespace::Shared => "shared",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for {namespace}/{key}: {source}")]
    Io {
        key: String,
        namespace: Namespace,
        #[source]
        source: std::io::Error,
    },
    #[error("store unavailable for {namespace}/{key}: {detail}")]
    Unavailable {
        key: String,
        namespace: Namespace,
        detail: String,
    },
}

impl StoreError {
    pub fn io(key: &str, namespace: Namespace, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            namespace,
            source,
        }
    }

    pub fn unavailable(key: &str, namespace: Namespace, detail: impl Into<String>) -> Self {
        Self::Unavailable {
            key: key.to_string(),
            namespace,
            detail: detail.into(),
        }
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str, namespace: Namespace) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str, namespace: Namespace) -> Result<(), StoreError>;

    /// Deleting an absent key succeeds.
    async fn delete(&self, key: &str, namespace: Namespace) -> Result<(), StoreError>;
}
