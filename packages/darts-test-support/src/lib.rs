//! Test support for the darts workspace.
//!
//! Shared by the `darts` unit tests (as a dev-dependency) and by the
//! integration test binaries under `apps/darts/tests`.

pub mod logging;
pub mod proptest_prelude;
pub mod unique_helpers;
