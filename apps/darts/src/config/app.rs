//! Application configuration loaded from environment variables.
//!
//! Every value has a default, so an empty environment is a valid
//! configuration. CLI flags override whatever is loaded here.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::rules::MAX_PLAYERS;
use crate::domain::state::PlayerId;
use crate::error::AppError;
use crate::store::Namespace;

pub const DEFAULT_STORE_DIR: &str = ".darts";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory for the file-backed store.
    pub store_dir: PathBuf,
    /// How often a shared match is re-read.
    pub poll_interval: Duration,
    /// Namespace to look in when loading at startup.
    pub shared: bool,
    /// Seat this client throws for in a shared match. `None` lets the client
    /// submit for whoever is up.
    pub local_player: Option<PlayerId>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            shared: false,
            local_player: None,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store_dir = lookup("DARTS_STORE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_dir);

        let poll_interval = match lookup("DARTS_POLL_INTERVAL_MS") {
            Some(raw) => parse_poll_interval(&raw)?,
            None => defaults.poll_interval,
        };

        let shared = match lookup("DARTS_SHARED") {
            Some(raw) => parse_bool("DARTS_SHARED", &raw)?,
            None => defaults.shared,
        };

        let local_player = match lookup("DARTS_LOCAL_PLAYER") {
            Some(raw) if !raw.trim().is_empty() => Some(parse_local_player(&raw)?),
            _ => None,
        };

        Ok(Self {
            store_dir,
            poll_interval,
            shared,
            local_player,
        })
    }

    pub fn namespace(&self) -> Namespace {
        Namespace::from_shared(self.shared)
    }
}

fn parse_poll_interval(raw: &str) -> Result<Duration, AppError> {
    let ms = raw.trim().parse::<u64>().map_err(|_| {
        AppError::config(format!(
            "DARTS_POLL_INTERVAL_MS must be a whole number of milliseconds, got '{raw}'"
        ))
    })?;
    if ms == 0 {
        return Err(AppError::config("DARTS_POLL_INTERVAL_MS must be positive"));
    }
    Ok(Duration::from_millis(ms))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}

/// Seat index, accepted as 0-based like the stored player ids.
pub fn parse_local_player(raw: &str) -> Result<PlayerId, AppError> {
    raw.trim()
        .parse::<PlayerId>()
        .ok()
        .filter(|seat| (*seat as usize) < MAX_PLAYERS)
        .ok_or_else(|| {
            AppError::config(format!(
                "DARTS_LOCAL_PLAYER must be a seat between 0 and {}, got '{raw}'",
                MAX_PLAYERS - 1
            ))
        })
}
