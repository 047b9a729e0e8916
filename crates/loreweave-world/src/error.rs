//! Error types for world-catalog operations.
//!
//! Lookups never error; absence is `Option::None`. Errors here are limited
//! to building the registry from a bad catalog and serializing the snapshot.

use thiserror::Error;

/// Errors raised while constructing or serializing world state.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Two catalog locations normalize to the same key.
    #[error("duplicate location id in catalog: {0}")]
    DuplicateLocation(String),

    /// Two catalog characters normalize to the same key.
    #[error("duplicate character id in catalog: {0}")]
    DuplicateCharacter(String),

    /// A catalog entry's id is empty after normalization.
    #[error("catalog entry '{0}' has an empty identifier")]
    EmptyIdentifier(String),

    /// The world snapshot could not be serialized to JSON.
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}
