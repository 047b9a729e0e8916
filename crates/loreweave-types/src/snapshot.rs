//! The world snapshot wire format.
//!
//! Outbound event-generation requests include a serialized view of the full
//! catalog (locations, characters, allowed event kinds) so the storyteller
//! only invents events the world can actually resolve. The shape is fixed by
//! the service contract:
//!
//! ```json
//! {
//!   "locations": [{"id": "holyTree", "name": "Holy Tree", "position": [4.0, 7.5]}],
//!   "characters": [{"id": "lionGladiator", "name": "Lion Gladiator"}],
//!   "events": ["moves"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Serialized view of the full world catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Every catalogued location.
    pub locations: Vec<SnapshotLocation>,
    /// Every catalogued character, spawnable or not.
    pub characters: Vec<SnapshotCharacter>,
    /// Event kinds the storyteller may emit.
    pub events: Vec<String>,
}

/// A location as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLocation {
    /// Identifier as authored.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Target point as an `[x, y]` pair.
    pub position: [f32; 2],
}

/// A character as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCharacter {
    /// Identifier as authored.
    pub id: String,
    /// Display name.
    pub name: String,
}
