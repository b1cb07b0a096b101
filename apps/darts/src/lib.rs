#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod bin_support;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod store;
pub mod sync;
pub mod utils;

// Re-exports for public API
pub use config::AppConfig;
pub use domain::{
    CheckoutRule, Match, MatchConfig, MatchPhase, MatchSetup, Player, PlayerId, Scoreboard,
    TurnInput, TurnOutcome,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::{MatchSession, SessionOptions};
pub use store::{FileStore, InMemoryStore, KeyValueStore, Namespace, StoreError};
pub use sync::{MatchSlot, PollOutcome, PollerHandle, SharedMatchPoller};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    darts_test_support::logging::init();
}
