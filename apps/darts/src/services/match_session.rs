//! The caller that owns the single active match.
//!
//! The engine is pure; this service holds the current value, swaps in each
//! next value the engine returns, persists it, and keeps the shared poller
//! running while the match is shared.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::domain::game_transition::MatchTransition;
use crate::domain::scoreboard::{scoreboard, Scoreboard};
use crate::domain::setup::MatchSetup;
use crate::domain::state::{is_players_turn, match_phase, Match, MatchPhase, PlayerId};
use crate::domain::turns::{submit_raw_turn, TurnOutcome};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::matches::{delete_match, load_match, save_match};
use crate::store::{KeyValueStore, Namespace};
use crate::sync::{MatchSlot, PollerHandle, SharedMatchPoller};
use crate::utils::match_id::generate_match_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Where `load` looks for an existing match.
    pub namespace: Namespace,
    /// Seat this client throws for in a shared match.
    pub local_player: Option<PlayerId>,
    pub poll_interval: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SessionOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            namespace: config.namespace(),
            local_player: config.local_player,
            poll_interval: config.poll_interval,
        }
    }
}

pub struct MatchSession {
    store: Arc<dyn KeyValueStore>,
    slot: MatchSlot,
    options: SessionOptions,
    poller: Option<PollerHandle>,
}

impl MatchSession {
    pub fn new(store: Arc<dyn KeyValueStore>, options: SessionOptions) -> Self {
        Self {
            store,
            slot: MatchSlot::default(),
            options,
            poller: None,
        }
    }

    /// Restore whatever match is stored in the configured namespace.
    ///
    /// Read failures are logged and leave the session without a match.
    pub async fn load(&mut self) -> MatchPhase {
        let namespace = self.options.namespace;
        let phase = {
            let _gate = self.slot.lock_writes().await;
            let loaded = match load_match(self.store.as_ref(), namespace).await {
                Ok(loaded) => loaded,
                Err(err) => {
                    warn!(%namespace, error = %err, code = %err.code(), "failed to load stored match");
                    None
                }
            };

            let phase = match_phase(loaded.as_ref());
            if let Some(m) = &loaded {
                info!(%namespace, ?phase, players = m.players.len(), "match restored");
            }
            *self.slot.write() = loaded;
            phase
        };
        self.sync_polling().await;
        phase
    }

    /// Start a new match, replacing any current one.
    ///
    /// A shared setup without a match id gets a generated one.
    pub async fn start(&mut self, mut setup: MatchSetup) -> Result<Match, AppError> {
        if setup.needs_match_id() {
            setup.shared_match_id = Some(generate_match_id());
        }
        let m = setup.start()?;

        info!(
            players = m.players.len(),
            starting_score = m.config.starting_score,
            checkout = m.config.checkout_rule.label(),
            shared = m.config.is_shared,
            match_id = m.config.match_id.as_deref().unwrap_or(""),
            "match started"
        );

        {
            let _gate = self.slot.lock_writes().await;
            *self.slot.write() = Some(m.clone());
            self.persist(&m).await;
        }
        self.sync_polling().await;
        Ok(m)
    }

    /// Submit raw turn text for the current player.
    ///
    /// Validation failures change nothing. Once the engine accepts the turn
    /// the new state is committed even if persisting it fails. The poller
    /// cannot adopt a stored value until the new one has been written.
    pub async fn submit(&self, raw: &str) -> Result<TurnOutcome, AppError> {
        let _gate = self.slot.lock_writes().await;
        let current = self.slot.read().clone().ok_or(AppError::NoActiveMatch)?;
        check_identity(&current, self.options.local_player)?;

        let resolution = submit_raw_turn(&current, raw).map_err(|err| {
            debug!(input = raw, error = %err, "turn rejected");
            AppError::from(err)
        })?;

        if resolution.outcome == TurnOutcome::Ignored {
            return Ok(TurnOutcome::Ignored);
        }

        *self.slot.write() = Some(resolution.next.clone());
        info!(outcome = ?resolution.outcome, "turn resolved");
        self.persist(&resolution.next).await;
        Ok(resolution.outcome)
    }

    /// Drop the current match and its stored copy.
    ///
    /// If the stored copy cannot be deleted the match stays active and the
    /// error is returned.
    pub async fn reset(&mut self) -> Result<(), AppError> {
        let namespace = self
            .slot
            .read()
            .as_ref()
            .map(|m| Namespace::from_shared(m.config.is_shared))
            .unwrap_or(self.options.namespace);

        {
            let _gate = self.slot.lock_writes().await;
            if let Err(err) = delete_match(self.store.as_ref(), namespace).await {
                error!(%namespace, error = %err, code = %err.code(), "failed to delete stored match");
                return Err(err);
            }
            *self.slot.write() = None;
        }

        // the poller takes the gate, so it is stopped only after release
        self.stop_polling().await;
        info!(%namespace, "match reset");
        Ok(())
    }

    pub fn current(&self) -> Option<Match> {
        self.slot.read().clone()
    }

    pub fn phase(&self) -> MatchPhase {
        match_phase(self.slot.read().as_ref())
    }

    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.slot.read().as_ref().map(scoreboard)
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PollerHandle::is_running)
    }

    /// Remote changes picked up by the poller, while one is running.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<MatchTransition>> {
        self.poller.as_ref().map(PollerHandle::subscribe)
    }

    /// Stop background work. The stored match is left in place.
    pub async fn shutdown(mut self) {
        self.stop_polling().await;
    }

    async fn persist(&self, m: &Match) {
        if let Err(err) = save_match(self.store.as_ref(), m).await {
            error!(
                namespace = %Namespace::from_shared(m.config.is_shared),
                error = %err,
                code = %err.code(),
                "failed to persist match; continuing with in-memory state"
            );
        }
    }

    async fn sync_polling(&mut self) {
        let shared = self
            .slot
            .read()
            .as_ref()
            .is_some_and(|m| m.config.is_shared);

        if shared {
            if !self.is_polling() {
                self.poller = Some(SharedMatchPoller::spawn(
                    Arc::clone(&self.store),
                    self.slot.clone(),
                    self.options.poll_interval,
                ));
            }
        } else {
            self.stop_polling().await;
        }
    }

    async fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
    }
}

/// Seat check for shared matches; local matches accept any submission.
fn check_identity(m: &Match, local_player: Option<PlayerId>) -> Result<(), DomainError> {
    let Some(me) = local_player else {
        return Ok(());
    };
    if !m.config.is_shared || m.is_complete() {
        return Ok(());
    }
    if me as usize >= m.players.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerIndex,
            format!(
                "Seat {me} is not in this {}-player match",
                m.players.len()
            ),
        ));
    }
    if is_players_turn(m, me) {
        return Ok(());
    }
    let up = m.current_player().map_or("another player", |p| p.name.as_str());
    Err(DomainError::validation(
        ValidationKind::OutOfTurn,
        format!("It is {up}'s turn"),
    ))
}
