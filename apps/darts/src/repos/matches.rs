//! Match repository: one JSON-encoded match per namespace.

use tracing::debug;

use crate::domain::state::Match;
use crate::error::AppError;
use crate::store::{KeyValueStore, Namespace};

/// Key every client uses for its single active match.
pub const MATCH_KEY: &str = "darts-game";

pub fn encode_match(m: &Match) -> Result<String, AppError> {
    serde_json::to_string(m)
        .map_err(|e| AppError::internal(format!("failed to encode match: {e}")))
}

pub fn decode_match(raw: &str) -> Result<Match, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::data_corruption("stored match could not be decoded", e))
}

/// Load the match stored in `namespace`, if any.
pub async fn load_match(
    store: &dyn KeyValueStore,
    namespace: Namespace,
) -> Result<Option<Match>, AppError> {
    let Some(raw) = store.get(MATCH_KEY, namespace).await? else {
        debug!(%namespace, "no stored match");
        return Ok(None);
    };
    decode_match(&raw).map(Some)
}

/// Persist `m` into the namespace its own config selects.
pub async fn save_match(store: &dyn KeyValueStore, m: &Match) -> Result<(), AppError> {
    let namespace = Namespace::from_shared(m.config.is_shared);
    let encoded = encode_match(m)?;
    store.set(MATCH_KEY, &encoded, namespace).await?;
    debug!(%namespace, bytes = encoded.len(), "match saved");
    Ok(())
}

pub async fn delete_match(store: &dyn KeyValueStore, namespace: Namespace) -> Result<(), AppError> {
    store.delete(MATCH_KEY, namespace).await?;
    debug!(%namespace, "match deleted");
    Ok(())
}
