//! Static world catalog entry types.
//!
//! The catalog is authored once (see the seed data in `loreweave-world`) and
//! is immutable after the registry is built from it. Identifiers here are
//! kept in their authored form; normalization happens at the registry
//! boundary via the key types.

use serde::{Deserialize, Serialize};

use crate::geometry::{Vec2, Vec3};

/// A named place characters can be sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Unique identifier as authored (e.g. `holyTree`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// The 2D point a character moving here walks toward.
    pub target_position: Vec2,
}

/// A character known to the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    /// Unique identifier as authored (e.g. `lionGladiator`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Spawn template. Entries without one are catalogued (and advertised to
    /// the storyteller) but never get a live instance.
    pub template: Option<CharacterTemplate>,
}

/// Instantiation data for a character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    /// Where the live instance starts, including its depth component.
    pub spawn_position: Vec3,
}

impl LocationEntry {
    /// Create a location entry.
    pub const fn new(id: String, name: String, target_position: Vec2) -> Self {
        Self {
            id,
            name,
            target_position,
        }
    }
}

impl CharacterEntry {
    /// Create a character entry.
    pub const fn new(id: String, name: String, template: Option<CharacterTemplate>) -> Self {
        Self { id, name, template }
    }

    /// Whether this entry can be instantiated at world start.
    pub const fn is_spawnable(&self) -> bool {
        self.template.is_some()
    }
}
