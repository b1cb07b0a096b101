use crate::domain::state::{match_phase, Match, MatchPhase, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTransition {
    /// Edge-triggered: a fresh match appeared (NoMatch/Completed -> InProgress,
    /// or a different match replaced the one in progress).
    MatchStarted,

    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: InProgress -> Completed
    MatchEnded { winner_name: String },

    /// Edge-triggered: a match was dropped (reset locally or remotely).
    MatchCleared,
}

/// Derive transitions between two observations of the active match.
///
/// Used to describe what a wholesale replacement (e.g. a shared-match poll)
/// changed.
pub fn derive_match_transitions(
    before: Option<&Match>,
    after: Option<&Match>,
) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();

    let before_phase = match_phase(before);
    let after_phase = match_phase(after);

    // 1. Cleared
    let Some(after) = after else {
        if before.is_some() {
            transitions.push(MatchTransition::MatchCleared);
        }
        return transitions;
    };

    // 2. Started
    let started = match before {
        None => true,
        Some(b) => {
            (before_phase == MatchPhase::Completed && after_phase == MatchPhase::InProgress)
                || is_different_match(b, after)
        }
    };
    if started {
        transitions.push(MatchTransition::MatchStarted);
    }

    // 3. Turn change
    if after_phase == MatchPhase::InProgress {
        let turn_moved = match before {
            Some(b) => started || b.current_player_index != after.current_player_index,
            None => true,
        };
        if turn_moved {
            if let Some(p) = after.current_player() {
                transitions.push(MatchTransition::TurnBecame { player_id: p.id });
            }
        }
    }

    // 4. Ended
    if before_phase != MatchPhase::Completed || started {
        if let Some(winner_name) = &after.winner_name {
            transitions.push(MatchTransition::MatchEnded {
                winner_name: winner_name.clone(),
            });
        }
    }

    transitions
}

/// Heuristic for "someone started over": configuration or roster changed.
fn is_different_match(before: &Match, after: &Match) -> bool {
    before.config != after.config
        || before.players.len() != after.players.len()
        || before
            .players
            .iter()
            .zip(&after.players)
            .any(|(b, a)| b.name != a.name || a.throw_history.len() < b.throw_history.len())
}
