//! Turning `darts new` arguments into a match setup.

use crate::domain::setup::MatchSetup;
use crate::domain::state::CheckoutRule;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Arguments of `darts new`, after clap has parsed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatchArgs {
    pub players: Vec<String>,
    pub starting_score: u32,
    pub checkout_rule: CheckoutRule,
    pub shared: bool,
    pub match_id: Option<String>,
}

impl NewMatchArgs {
    /// A match id only means something for a shared match, so passing one
    /// without `--shared` is rejected rather than dropped.
    pub fn into_setup(self) -> Result<MatchSetup, AppError> {
        if self.match_id.is_some() && !self.shared {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "--match-id only applies to shared matches; add --shared",
            ));
        }

        let setup = MatchSetup::with_players(self.players)
            .starting_score(self.starting_score)
            .checkout_rule(self.checkout_rule);
        Ok(if self.shared {
            setup.shared(self.match_id)
        } else {
            setup
        })
    }
}
