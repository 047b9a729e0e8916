//! World state for the Loreweave client: the static catalog registry, the
//! live spawn index, and character movement.
//!
//! The registry and spawn index are plain values built once at startup and
//! passed to whoever needs them. There is no global state; testing with a
//! fake catalog is just constructing a different registry.
//!
//! # Modules
//!
//! - [`error`] -- Error types for catalog construction and serialization.
//! - [`registry`] -- [`WorldRegistry`]: normalized-key lookups over the
//!   static catalog, plus the snapshot sent to the storyteller.
//! - [`spawn`] -- [`SpawnIndex`]: one live [`SpawnedCharacter`] per
//!   spawnable catalog entry, built once after the registry.
//! - [`movement`] -- Linear stepping toward a target point, driven as a
//!   cancellable task per character.
//! - [`wander`] -- The ambient move-then-idle drift characters follow
//!   between storyteller events.
//! - [`starting_world`] -- The hard-coded seed catalog.
//!
//! [`SpawnedCharacter`]: spawn::SpawnedCharacter

pub mod error;
pub mod movement;
pub mod registry;
pub mod spawn;
pub mod starting_world;
pub mod wander;

pub use error::WorldError;
pub use movement::{MovementConfig, MovementSet, drive_to_target, step_towards};
pub use registry::WorldRegistry;
pub use spawn::{SpawnIndex, SpawnedCharacter};
pub use starting_world::starting_catalog;
pub use wander::{WanderConfig, drive_wander};
