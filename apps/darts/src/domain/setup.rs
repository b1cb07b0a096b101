//! Match setup: the roster and settings collected before a match starts.

use crate::domain::rules::{
    default_player_name, valid_player_count, DEFAULT_STARTING_SCORE, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::state::{create_match, CheckoutRule, Match, MatchConfig};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub player_names: Vec<String>,
    pub starting_score: u32,
    pub checkout_rule: CheckoutRule,
    pub is_shared: bool,
    pub shared_match_id: Option<String>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            player_names: vec![default_player_name(0), default_player_name(1)],
            starting_score: DEFAULT_STARTING_SCORE,
            checkout_rule: CheckoutRule::Double,
            is_shared: false,
            shared_match_id: None,
        }
    }
}

impl MatchSetup {
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    pub fn checkout_rule(mut self, rule: CheckoutRule) -> Self {
        self.checkout_rule = rule;
        self
    }

    pub fn shared(mut self, match_id: Option<String>) -> Self {
        self.is_shared = true;
        self.shared_match_id = match_id;
        self
    }

    /// Append a placeholder player. Returns `false` once the roster is full.
    pub fn add_player(&mut self) -> bool {
        if self.player_names.len() >= MAX_PLAYERS {
            return false;
        }
        let idx = self.player_names.len();
        self.player_names.push(default_player_name(idx));
        true
    }

    /// Remove the player at `index`. Refused at the minimum roster size.
    pub fn remove_player(&mut self, index: usize) -> bool {
        if self.player_names.len() <= MIN_PLAYERS || index >= self.player_names.len() {
            return false;
        }
        self.player_names.remove(index);
        true
    }

    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> Result<(), DomainError> {
        let slot = self.player_names.get_mut(index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayerIndex,
                format!("No player at position {index}"),
            )
        })?;
        *slot = name.into();
        Ok(())
    }

    /// Whether a shared setup still needs a generated match id.
    pub fn needs_match_id(&self) -> bool {
        self.is_shared
            && self
                .shared_match_id
                .as_deref()
                .map_or(true, |id| id.trim().is_empty())
    }

    /// Validate into an engine config plus the roster with placeholders filled.
    pub fn build(&self) -> Result<(MatchConfig, Vec<String>), DomainError> {
        let count = self.player_names.len();
        let range = valid_player_count();
        if !range.contains(&count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Player count must be in range {range:?}, got {count}"),
            ));
        }

        if self.starting_score == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidStartingScore,
                "Starting score must be positive",
            ));
        }

        let match_id = if self.is_shared {
            if self.needs_match_id() {
                return Err(DomainError::validation(
                    ValidationKind::MissingMatchId,
                    "Shared match needs an id",
                ));
            }
            self.shared_match_id
                .as_ref()
                .map(|id| id.trim().to_string())
        } else {
            None
        };

        let names = self
            .player_names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    default_player_name(idx)
                } else {
                    trimmed.to_string()
                }
            })
            .collect();

        let config = MatchConfig {
            starting_score: self.starting_score,
            checkout_rule: self.checkout_rule,
            is_shared: self.is_shared,
            match_id,
        };
        Ok((config, names))
    }

    /// `build` followed by `create_match`.
    pub fn start(&self) -> Result<Match, DomainError> {
        let (config, names) = self.build()?;
        Ok(create_match(config, &names))
    }
}
