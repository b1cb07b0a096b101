//! Read-only scoreboard view of a match, for whatever renders it.

use serde::Serialize;

use crate::domain::rules::RECENT_THROWS;
use crate::domain::state::{Match, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreboardRow {
    pub player_id: PlayerId,
    pub name: String,
    pub remaining_score: u32,
    /// Up to the last five accepted turns, oldest first.
    pub recent_throws: Vec<u32>,
    pub is_current: bool,
    pub is_winner: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// e.g. "Double Out • 501"
    pub title: String,
    pub is_shared: bool,
    pub match_id: Option<String>,
    pub current_player: Option<String>,
    pub winner_name: Option<String>,
    pub rows: Vec<ScoreboardRow>,
}

pub fn scoreboard(m: &Match) -> Scoreboard {
    let complete = m.is_complete();
    let rows = m
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let at_pointer = idx == m.current_player_index;
            let skip = p.throw_history.len().saturating_sub(RECENT_THROWS);
            ScoreboardRow {
                player_id: p.id,
                name: p.name.clone(),
                remaining_score: p.remaining_score,
                recent_throws: p.throw_history[skip..].to_vec(),
                is_current: at_pointer && !complete,
                // the pointer does not move on a checkout
                is_winner: at_pointer && complete,
            }
        })
        .collect();

    Scoreboard {
        title: format!(
            "{} • {}",
            m.config.checkout_rule.label(),
            m.config.starting_score
        ),
        is_shared: m.config.is_shared,
        match_id: m.config.match_id.clone(),
        current_player: if complete {
            None
        } else {
            m.current_player().map(|p| p.name.clone())
        },
        winner_name: m.winner_name.clone(),
        rows,
    }
}
