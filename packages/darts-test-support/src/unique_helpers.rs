//! Unique test data.
//!
//! Integration tests share one process per binary, so anything that ends up
//! as a store key or match id gets a ULID suffix to keep tests isolated.

use ulid::Ulid;

/// Unique string in the form `{prefix}-{ulid}`.
///
/// ```
/// use darts_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("match");
/// let b = unique_str("match");
/// assert_ne!(a, b);
/// assert!(a.starts_with("match-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Unique player roster of `count` names sharing a prefix.
///
/// ```
/// use darts_test_support::unique_helpers::unique_names;
///
/// let names = unique_names("p", 3);
/// assert_eq!(names.len(), 3);
/// assert_ne!(names[0], names[1]);
/// ```
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| unique_str(&format!("{prefix}{}", i + 1)))
        .collect()
}
