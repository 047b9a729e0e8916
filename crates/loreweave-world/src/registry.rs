//! The world registry: normalized-key lookups over the static catalog.
//!
//! Built once at startup from the authored catalog and immutable afterward.
//! Lookups take the raw identifier strings the storyteller echoes back and
//! normalize them through the key types, so `" HolyTree "` and `"holytree"`
//! both resolve to the entry authored as `"holyTree"`. Unknown or empty
//! identifiers return `None`, never an error.

use std::collections::BTreeMap;

use loreweave_types::{
    ALLOWED_EVENT_KINDS, CharacterEntry, CharacterKey, LocationEntry, LocationKey,
    SnapshotCharacter, SnapshotLocation, WorldSnapshot,
};

use crate::error::WorldError;

/// The static catalog of known locations and characters.
#[derive(Debug, Clone)]
pub struct WorldRegistry {
    locations: BTreeMap<LocationKey, LocationEntry>,
    characters: BTreeMap<CharacterKey, CharacterEntry>,
    allowed_events: Vec<String>,
}

impl WorldRegistry {
    /// Build the registry from the authored catalog.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyIdentifier`] for an entry whose id is
    /// blank, or [`WorldError::DuplicateLocation`] /
    /// [`WorldError::DuplicateCharacter`] when two entries normalize to the
    /// same key. The catalog is trusted static data, so either is a bug
    /// worth failing loudly on rather than silently shadowing an entry.
    pub fn new(
        locations: Vec<LocationEntry>,
        characters: Vec<CharacterEntry>,
    ) -> Result<Self, WorldError> {
        let mut location_map = BTreeMap::new();
        for entry in locations {
            let key = LocationKey::parse(&entry.id)
                .ok_or_else(|| WorldError::EmptyIdentifier(entry.name.clone()))?;
            if location_map.insert(key, entry.clone()).is_some() {
                return Err(WorldError::DuplicateLocation(entry.id));
            }
        }

        let mut character_map = BTreeMap::new();
        for entry in characters {
            let key = CharacterKey::parse(&entry.id)
                .ok_or_else(|| WorldError::EmptyIdentifier(entry.name.clone()))?;
            if character_map.insert(key, entry.clone()).is_some() {
                return Err(WorldError::DuplicateCharacter(entry.id));
            }
        }

        Ok(Self {
            locations: location_map,
            characters: character_map,
            allowed_events: ALLOWED_EVENT_KINDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }

    /// Look up a location by raw identifier.
    ///
    /// Normalizes the input; returns `None` for empty or unknown ids.
    pub fn lookup_location(&self, id: &str) -> Option<&LocationEntry> {
        let key = LocationKey::parse(id)?;
        self.locations.get(&key)
    }

    /// Look up a character by raw identifier.
    ///
    /// Normalizes the input; returns `None` for empty or unknown ids.
    pub fn lookup_character(&self, id: &str) -> Option<&CharacterEntry> {
        let key = CharacterKey::parse(id)?;
        self.characters.get(&key)
    }

    /// Iterate all characters with their normalized keys.
    pub fn characters(&self) -> impl Iterator<Item = (&CharacterKey, &CharacterEntry)> {
        self.characters.iter()
    }

    /// Event kinds the storyteller may emit.
    pub fn allowed_events(&self) -> &[String] {
        &self.allowed_events
    }

    /// Number of catalogued locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Build the full-catalog snapshot for outbound requests.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            locations: self
                .locations
                .values()
                .map(|entry| SnapshotLocation {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    position: [entry.target_position.x, entry.target_position.y],
                })
                .collect(),
            characters: self
                .characters
                .values()
                .map(|entry| SnapshotCharacter {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                })
                .collect(),
            events: self.allowed_events.clone(),
        }
    }

    /// Serialize the snapshot for the `gameData` request field.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Snapshot`] if JSON encoding fails.
    pub fn snapshot_json(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}
