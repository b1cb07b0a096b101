use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Three darts at treble twenty.
pub const MAX_TURN_SCORE: u32 = 180;

pub const STARTING_SCORE_PRESETS: [u32; 3] = [301, 501, 701];
pub const DEFAULT_STARTING_SCORE: u32 = 501;

/// How many accepted turns a scoreboard row shows.
pub const RECENT_THROWS: usize = 5;

pub fn valid_turn_range() -> RangeInclusive<u32> {
    0..=MAX_TURN_SCORE
}

pub fn valid_player_count() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// A remainder below zero, or exactly one (no double can finish it), busts.
pub fn is_bust_remainder(candidate: i64) -> bool {
    candidate < 0 || candidate == 1
}

/// Placeholder for a blank name at roster position `index` (0-based).
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}
