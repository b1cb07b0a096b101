pub mod match_session;

pub use match_session::{MatchSession, SessionOptions};
