use serde::{Deserialize, Serialize};

use crate::domain::rules::{default_player_name, MAX_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=5, positional

/// Finishing requirement for the turn that reaches exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutRule {
    /// The last dart must be a double.
    Double,
    /// Any dart may finish.
    Single,
}

impl CheckoutRule {
    pub fn requires_double(self) -> bool {
        matches!(self, CheckoutRule::Double)
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckoutRule::Double => "Double Out",
            CheckoutRule::Single => "Single Out",
        }
    }
}

/// Match settings, fixed once the match starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub starting_score: u32,
    pub checkout_rule: CheckoutRule,
    /// Selects the shared persistence namespace.
    pub is_shared: bool,
    /// Opaque id participants exchange for a shared match; `None` when local.
    #[serde(default)]
    pub match_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub remaining_score: u32,
    /// One entry per accepted turn; busts and rejected checkouts are absent.
    pub throw_history: Vec<u32>,
}

/// Entire match container, sufficient for pure engine operations.
///
/// Values are replaced wholesale on every transition; nothing mutates a
/// `Match` that someone else may be reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Turn order.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub config: MatchConfig,
    /// Set once, by the checkout that ends the match.
    #[serde(default)]
    pub winner_name: Option<String>,
}

/// Lifecycle of the single active match a client tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    NoMatch,
    InProgress,
    Completed,
}

impl Match {
    pub fn is_complete(&self) -> bool {
        self.winner_name.is_some()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_complete() {
            MatchPhase::Completed
        } else {
            MatchPhase::InProgress
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }
}

/// Phase of an optional active match.
pub fn match_phase(current: Option<&Match>) -> MatchPhase {
    current.map_or(MatchPhase::NoMatch, Match::phase)
}

/// Build a fresh match: everyone at the starting score, first player up.
///
/// Roster bounds belong to the setup layer (`MatchSetup::build`); blank names
/// still fall back to their positional placeholder here.
pub fn create_match(config: MatchConfig, player_names: &[String]) -> Match {
    debug_assert!(player_names.len() <= MAX_PLAYERS);
    let players = player_names
        .iter()
        .enumerate()
        .map(|(idx, name)| Player {
            id: idx as PlayerId,
            name: if name.trim().is_empty() {
                default_player_name(idx)
            } else {
                name.clone()
            },
            remaining_score: config.starting_score,
            throw_history: Vec::new(),
        })
        .collect();

    Match {
        players,
        current_player_index: 0,
        config,
        winner_name: None,
    }
}

/// Index of the player after `current`, wrapping around the roster.
#[inline]
pub fn next_player_index(current: usize, player_count: usize) -> usize {
    debug_assert!(player_count > 0, "roster must not be empty");
    (current + 1) % player_count
}

/// Whether `who` is the player expected to throw next.
pub fn is_players_turn(m: &Match, who: PlayerId) -> bool {
    !m.is_complete() && m.current_player_index == who as usize
}

pub fn require_current_player<'a>(
    m: &'a Match,
    ctx: &'static str,
) -> Result<&'a Player, DomainError> {
    if m.players.is_empty() {
        return Err(DomainError::invariant(format!(
            "match has no players ({ctx})"
        )));
    }
    m.current_player().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidPlayerIndex,
            format!(
                "current player index {} outside roster of {} ({ctx})",
                m.current_player_index,
                m.players.len()
            ),
        )
    })
}
