#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use darts::{InMemoryStore, KeyValueStore, MatchSession, Namespace, PlayerId, SessionOptions, StoreError};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    darts_test_support::logging::init();
}

/// Options with a poll interval short enough for tests.
pub fn options(namespace: Namespace, local_player: Option<PlayerId>) -> SessionOptions {
    SessionOptions {
        namespace,
        local_player,
        poll_interval: Duration::from_millis(20),
    }
}

pub fn session_on(store: &InMemoryStore, namespace: Namespace) -> MatchSession {
    MatchSession::new(Arc::new(store.clone()), options(namespace, None))
}

/// Store wrapper whose operations can be switched to fail.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    set_delay_ms: Arc<AtomicU64>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Make every `set` take this long before it lands.
    pub fn slow_writes(&self, delay: Duration) {
        self.set_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Covers both `set` and `delete`.
    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str, namespace: Namespace) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(key, namespace, "reads disabled"));
        }
        self.inner.get(key, namespace).await
    }

    async fn set(&self, key: &str, value: &str, namespace: Namespace) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(key, namespace, "writes disabled"));
        }
        let delay = self.set_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.inner.set(key, value, namespace).await
    }

    async fn delete(&self, key: &str, namespace: Namespace) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(key, namespace, "writes disabled"));
        }
        self.inner.delete(key, namespace).await
    }
}

/// Poll `check` until it holds or `timeout` passes.
pub async fn eventually<F>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

/// Raw stored value, keyed the way the repository keys it.
pub async fn stored(store: &InMemoryStore, namespace: Namespace) -> Option<String> {
    store
        .get(darts::repos::matches::MATCH_KEY, namespace)
        .await
        .unwrap()
}
