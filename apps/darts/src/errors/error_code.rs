//! Error codes for the darts scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the CLI prints next to
//! a rejected command.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn and setup validation
    /// Turn total is not a number or lies outside 0..=180
    InvalidTurnScore,
    /// Roster outside 2..=6 players
    InvalidPlayerCount,
    /// Starting score is not positive
    InvalidStartingScore,
    /// Shared match has no id
    MissingMatchId,
    /// Player index outside the roster
    InvalidPlayerIndex,
    /// Another player is up in a shared match
    OutOfTurn,
    /// General validation error
    ValidationError,

    // Session state
    /// No match has been started or loaded
    NoActiveMatch,

    // Persistence
    /// Store could not be read or written
    StoreUnavailable,
    /// Persisted match could not be decoded
    DataCorruption,

    // System
    ConfigError,
    InternalError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 12] = [
        Self::InvalidTurnScore,
        Self::InvalidPlayerCount,
        Self::InvalidStartingScore,
        Self::MissingMatchId,
        Self::InvalidPlayerIndex,
        Self::OutOfTurn,
        Self::ValidationError,
        Self::NoActiveMatch,
        Self::StoreUnavailable,
        Self::DataCorruption,
        Self::ConfigError,
        Self::InternalError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTurnScore => "INVALID_TURN_SCORE",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidStartingScore => "INVALID_STARTING_SCORE",
            Self::MissingMatchId => "MISSING_MATCH_ID",
            Self::InvalidPlayerIndex => "INVALID_PLAYER_INDEX",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::NoActiveMatch => "NO_ACTIVE_MATCH",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
