//! Repository functions between the domain layer and the key-value store.

pub mod matches;
