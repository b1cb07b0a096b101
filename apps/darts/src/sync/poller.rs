//! Periodic re-read of the shared match.
//!
//! Other clients write the shared namespace directly; nothing pushes changes
//! to us. The poller re-reads the stored match on a fixed interval and
//! replaces local state wholesale when it differs. Last write wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::game_transition::{derive_match_transitions, MatchTransition};
use crate::error::AppError;
use crate::repos::matches::load_match;
use crate::store::{KeyValueStore, Namespace};
use crate::sync::MatchSlot;

const TRANSITION_BUFFER: usize = 32;

/// Result of one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing stored in the shared namespace.
    Absent,
    /// Stored value matches local state, or local state is not a shared match.
    Unchanged,
    /// Local state was replaced; these transitions describe the change.
    Replaced(Vec<MatchTransition>),
}

/// Read the shared match once and adopt it if it differs from `slot`.
///
/// Only a shared match in the slot is ever replaced; a local match or an
/// empty slot is left alone. Holds the slot's write gate, so a local turn that
/// is still being persisted is never overwritten by the value it replaces.
pub async fn poll_once(store: &dyn KeyValueStore, slot: &MatchSlot) -> Result<PollOutcome, AppError> {
    let _gate = slot.lock_writes().await;
    let Some(fetched) = load_match(store, Namespace::Shared).await? else {
        return Ok(PollOutcome::Absent);
    };

    let mut guard = slot.write();
    let current = match guard.as_ref() {
        Some(m) if m.config.is_shared => m,
        _ => return Ok(PollOutcome::Unchanged),
    };
    if *current == fetched {
        return Ok(PollOutcome::Unchanged);
    }

    let transitions = derive_match_transitions(Some(current), Some(&fetched));
    *guard = Some(fetched);
    drop(guard);

    for transition in &transitions {
        info!(?transition, "shared match changed remotely");
    }
    Ok(PollOutcome::Replaced(transitions))
}

pub struct SharedMatchPoller;

impl SharedMatchPoller {
    /// Start polling on the current tokio runtime.
    ///
    /// The first read happens one `interval` after spawning; the caller has
    /// just loaded or written the match itself.
    pub fn spawn(store: Arc<dyn KeyValueStore>, slot: MatchSlot, interval: Duration) -> PollerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let (events, _) = broadcast::channel(TRANSITION_BUFFER);
        let sender = events.clone();
        let period = interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval yields immediately on the first tick
            ticker.tick().await;

            debug!(interval_ms = period.as_millis() as u64, "shared match poller started");
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        match poll_once(store.as_ref(), &slot).await {
                            Ok(PollOutcome::Replaced(transitions)) => {
                                for transition in transitions {
                                    // no subscribers is fine
                                    let _ = sender.send(transition);
                                }
                            }
                            Ok(_) => {}
                            Err(err) => {
                                warn!(error = %err, code = %err.code(), "shared match poll failed");
                            }
                        }
                    }
                }
            }
            debug!("shared match poller stopped");
        });

        PollerHandle {
            token,
            events,
            task: Some(task),
        }
    }
}

/// Owner of a running poller. Dropping it cancels the task.
pub struct PollerHandle {
    token: CancellationToken,
    events: broadcast::Sender<MatchTransition>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Transitions caused by remote changes, from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchTransition> {
        self.events.subscribe()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel and wait for the task to exit.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(error = %err, "shared match poller ended abnormally");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
