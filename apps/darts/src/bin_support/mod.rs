//! Helpers for the `darts` binary that are worth testing in the library.

pub mod new_match;
pub mod render;
