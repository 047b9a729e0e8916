//! Shared type definitions for the Loreweave world client.
//!
//! Everything that crosses a crate boundary lives here: the normalized
//! identifier keys used by the registry and spawn index, the small geometry
//! types, the event payload received from the storyteller service, the
//! catalog entry types, and the world snapshot wire format sent back to it.
//!
//! # Modules
//!
//! - [`ids`] -- Normalized identifier newtypes ([`CharacterKey`],
//!   [`LocationKey`]). The constructor is the single place where trimming
//!   and lowercasing happen, so lookups can never disagree on normalization.
//! - [`geometry`] -- [`Vec2`] and [`Vec3`] with the distance math the
//!   movement code needs.
//! - [`event`] -- [`WorldEvent`], the payload the storyteller produces, plus
//!   the list of event kinds the service is allowed to emit.
//! - [`catalog`] -- [`LocationEntry`] and [`CharacterEntry`], the static
//!   world catalog loaded once at startup.
//! - [`snapshot`] -- [`WorldSnapshot`], the serialized catalog shape included
//!   in outbound event-generation requests.

pub mod catalog;
pub mod event;
pub mod geometry;
pub mod ids;
pub mod snapshot;

pub use catalog::{CharacterEntry, CharacterTemplate, LocationEntry};
pub use event::{ALLOWED_EVENT_KINDS, WorldEvent};
pub use geometry::{Vec2, Vec3};
pub use ids::{CharacterKey, LocationKey};
pub use snapshot::{SnapshotCharacter, SnapshotLocation, WorldSnapshot};
