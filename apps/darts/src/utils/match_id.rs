//! Match id generation for shared matches.
//!
//! Ids are ULIDs: 26 characters of Crockford's Base32, time-ordered, so
//! clients can tell a newer shared match from an older one at a glance.

use ulid::Ulid;

/// Length of a generated match id.
pub const MATCH_ID_LEN: usize = 26;

/// Generate a fresh match id.
///
/// # Example
/// ```
/// use darts::utils::match_id::generate_match_id;
///
/// let id1 = generate_match_id();
/// let id2 = generate_match_id();
/// assert_ne!(id1, id2);
/// assert_eq!(id1.len(), 26);
/// ```
pub fn generate_match_id() -> String {
    Ulid::new().to_string()
}
