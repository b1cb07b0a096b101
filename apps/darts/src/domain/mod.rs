//! Domain layer: the pure X01 match engine and its setup and view helpers.

pub mod game_transition;
pub mod rules;
pub mod scoreboard;
pub mod setup;
pub mod state;
pub mod turn_input;
pub mod turns;

#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use game_transition::{derive_match_transitions, MatchTransition};
pub use scoreboard::{scoreboard, Scoreboard, ScoreboardRow};
pub use setup::MatchSetup;
pub use state::{
    create_match, match_phase, CheckoutRule, Match, MatchConfig, MatchPhase, Player, PlayerId,
};
pub use turn_input::{parse_turn_input, TurnInput};
pub use turns::{submit_raw_turn, submit_turn, TurnOutcome, TurnResolution};
