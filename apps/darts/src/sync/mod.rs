//! Keeping a shared match in step with other clients.

pub mod poller;

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::state::Match;

/// The single active match, shared between a session and its poller.
///
/// Reads and plain swaps go through the `RwLock`. Any sequence that updates
/// the slot and then writes the store, or reads the store and then updates
/// the slot, holds the write gate for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct MatchSlot {
    current: Arc<RwLock<Option<Match>>>,
    writes: Arc<Mutex<()>>,
}

impl MatchSlot {
    pub fn new(initial: Option<Match>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            writes: Arc::new(Mutex::new(())),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Option<Match>> {
        self.current.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Option<Match>> {
        self.current.write()
    }

    /// Exclusive right to sync the slot with the store.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }
}

pub use poller::{poll_once, PollOutcome, PollerHandle, SharedMatchPoller};
