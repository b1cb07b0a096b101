use crate::domain::rules::is_bust_remainder;
use crate::domain::state::{next_player_index, require_current_player, Match, PlayerId};
use crate::domain::turn_input::{parse_turn_input, TurnInput};
use crate::errors::domain::DomainError;

/// What a submitted turn did to the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing submitted, or the match is already won.
    Ignored,
    /// Accepted: score reduced and recorded.
    Scored {
        player_id: PlayerId,
        scored: u32,
        remaining: u32,
    },
    /// Over-shot, or left exactly one. Turn passes, score stands.
    Bust { player_id: PlayerId, attempted: u32 },
    /// Exact finish without a double under double-out. Handled as a bust.
    CheckoutRejected { player_id: PlayerId, attempted: u32 },
    /// Exact finish; the match is over.
    Checkout {
        player_id: PlayerId,
        winner_name: String,
    },
}

impl TurnOutcome {
    /// Whether play passed to the next player.
    pub fn advanced_turn(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Scored { .. }
                | TurnOutcome::Bust { .. }
                | TurnOutcome::CheckoutRejected { .. }
        )
    }

    /// Feedback line for the player.
    pub fn message(&self) -> String {
        match self {
            TurnOutcome::Ignored => "Nothing to submit".to_string(),
            TurnOutcome::Scored {
                scored, remaining, ..
            } => format!("Scored {scored}, {remaining} remaining"),
            TurnOutcome::Bust { attempted, .. } => {
                format!("Bust! {attempted} is too many, score stays unchanged")
            }
            TurnOutcome::CheckoutRejected { .. } => "You must finish on a double!".to_string(),
            TurnOutcome::Checkout { winner_name, .. } => format!("{winner_name} wins!"),
        }
    }
}

/// The next match value together with what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResolution {
    pub next: Match,
    pub outcome: TurnOutcome,
}

impl TurnResolution {
    fn unchanged(current: &Match) -> Self {
        Self {
            next: current.clone(),
            outcome: TurnOutcome::Ignored,
        }
    }
}

/// Resolve one turn for the current player.
///
/// Never partially updates: the returned `next` is either `current` with the
/// turn applied or an exact copy of it.
pub fn submit_turn(current: &Match, input: TurnInput) -> Result<TurnResolution, DomainError> {
    if current.is_complete() {
        return Ok(TurnResolution::unchanged(current));
    }

    let player = require_current_player(current, "submit_turn")?;
    let player_id = player.id;
    let scored = input.total();
    let candidate = i64::from(player.remaining_score) - i64::from(scored);

    if is_bust_remainder(candidate) {
        return Ok(pass_turn(
            current,
            TurnOutcome::Bust {
                player_id,
                attempted: scored,
            },
        ));
    }

    if candidate == 0 {
        if current.config.checkout_rule.requires_double() && !input.is_double_finish() {
            return Ok(pass_turn(
                current,
                TurnOutcome::CheckoutRejected {
                    player_id,
                    attempted: scored,
                },
            ));
        }

        let winner_name = player.name.clone();
        let mut next = current.clone();
        let idx = next.current_player_index;
        next.players[idx].remaining_score = 0;
        next.players[idx].throw_history.push(scored);
        next.winner_name = Some(winner_name.clone());
        // turn pointer stays on the winner

        return Ok(TurnResolution {
            next,
            outcome: TurnOutcome::Checkout {
                player_id,
                winner_name,
            },
        });
    }

    // candidate > 1 here, and no larger than the current remaining score
    let remaining = u32::try_from(candidate)
        .map_err(|_| DomainError::invariant(format!("remainder {candidate} does not fit")))?;
    let mut next = current.clone();
    let idx = next.current_player_index;
    next.players[idx].remaining_score = remaining;
    next.players[idx].throw_history.push(scored);
    next.current_player_index = next_player_index(idx, next.players.len());

    Ok(TurnResolution {
        next,
        outcome: TurnOutcome::Scored {
            player_id,
            scored,
            remaining,
        },
    })
}

/// Resolve one turn from raw text.
///
/// Order matters: a completed match or empty text is a no-op before any
/// parsing happens, so garbage submitted after a win is still ignored.
pub fn submit_raw_turn(current: &Match, raw: &str) -> Result<TurnResolution, DomainError> {
    if current.is_complete() {
        return Ok(TurnResolution::unchanged(current));
    }
    match parse_turn_input(raw)? {
        None => Ok(TurnResolution::unchanged(current)),
        Some(input) => submit_turn(current, input),
    }
}

fn pass_turn(current: &Match, outcome: TurnOutcome) -> TurnResolution {
    let mut next = current.clone();
    next.current_player_index =
        next_player_index(next.current_player_index, next.players.len());
    TurnResolution { next, outcome }
}
