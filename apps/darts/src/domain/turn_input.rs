//! Turn input parsing from free text (e.g., "60", "40d", "32 D").
//!
//! The engine only ever sees a [`TurnInput`]; the `d` marker convention stops
//! at this boundary.

use std::str::FromStr;

use crate::domain::rules::valid_turn_range;
use crate::errors::domain::{DomainError, ValidationKind};

/// One validated turn total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnInput {
    total: u32,
    is_double_finish: bool,
}

impl TurnInput {
    /// Validates that `total` is physically reachable with three darts.
    pub fn new(total: u32, is_double_finish: bool) -> Result<Self, DomainError> {
        let range = valid_turn_range();
        if !range.contains(&total) {
            return Err(DomainError::validation(
                ValidationKind::InvalidTurnScore,
                format!("Score must be in range {range:?}, got {total}"),
            ));
        }
        Ok(Self {
            total,
            is_double_finish,
        })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_double_finish(&self) -> bool {
        self.is_double_finish
    }
}

impl FromStr for TurnInput {
    type Err = DomainError;

    /// Numeric prefix is the total; an ASCII `d` anywhere marks a double.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let total = leading_integer(s).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidTurnScore,
                format!("Not a score: {s:?}"),
            )
        })?;

        let range = valid_turn_range();
        let total = u32::try_from(total)
            .ok()
            .filter(|t| range.contains(t))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidTurnScore,
                    format!("Score must be in range {range:?}, got {s:?}"),
                )
            })?;

        TurnInput::new(total, has_double_marker(s))
    }
}

/// Parse raw turn text. Empty text is not a submission and yields `None`.
pub fn parse_turn_input(raw: &str) -> Result<Option<TurnInput>, DomainError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<TurnInput>().map(Some)
}

pub fn has_double_marker(raw: &str) -> bool {
    raw.chars().any(|c| c.eq_ignore_ascii_case(&'d'))
}

/// Signed integer prefix after leading whitespace, ignoring whatever follows.
///
/// Digit runs too long for `i64` saturate so they still land out of range.
fn leading_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
