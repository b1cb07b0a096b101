//! Domain-level error type used by the match engine and the setup layer.
//!
//! This error type knows nothing about storage or the CLI. Callers convert
//! it into `crate::error::AppError` via the provided `From` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which rule a rejected input broke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Turn total is not a number or lies outside 0..=180.
    InvalidTurnScore,
    /// Roster outside 2..=6 players.
    InvalidPlayerCount,
    /// Starting score must be positive.
    InvalidStartingScore,
    /// Shared match without an id to exchange.
    MissingMatchId,
    /// Player index outside the roster.
    InvalidPlayerIndex,
    /// A shared-match client submitted while another player is up.
    OutOfTurn,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// A match value that breaks a structural invariant (e.g. an empty roster
    /// read back from storage).
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Invariant(_) => None,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Invariant(d) => d,
        }
    }
}
