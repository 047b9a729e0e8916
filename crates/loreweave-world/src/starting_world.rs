//! The hard-coded seed catalog the world starts from.
//!
//! Five locations and four characters. One character is deliberately left
//! without a spawn template: it exists in the catalog the storyteller sees
//! but never gets a live instance, exercising the not-spawnable path.

use loreweave_types::{CharacterEntry, CharacterTemplate, LocationEntry, Vec2, Vec3};

/// Helper to build a [`LocationEntry`].
fn location(id: &str, name: &str, x: f32, y: f32) -> LocationEntry {
    LocationEntry::new(id.to_owned(), name.to_owned(), Vec2::new(x, y))
}

/// Helper to build a spawnable [`CharacterEntry`].
fn character(id: &str, name: &str, x: f32, y: f32, z: f32) -> CharacterEntry {
    CharacterEntry::new(
        id.to_owned(),
        name.to_owned(),
        Some(CharacterTemplate {
            spawn_position: Vec3::new(x, y, z),
        }),
    )
}

/// The default starting catalog: locations and characters.
pub fn starting_catalog() -> (Vec<LocationEntry>, Vec<CharacterEntry>) {
    let locations = vec![
        location("holyTree", "Holy Tree", 4.0, 7.5),
        location("emberForge", "Ember Forge", -6.5, 2.0),
        location("mossWell", "Moss Well", 1.5, -3.0),
        location("ashGate", "Ash Gate", -2.0, -8.0),
        location("gleamHarbor", "Gleam Harbor", 9.0, -1.5),
    ];

    let characters = vec![
        character("lionGladiator", "Lion Gladiator", 0.0, 0.0, 0.1),
        character("owlSeer", "Owl Seer", -3.0, 4.0, 0.2),
        character("foxMinstrel", "Fox Minstrel", 5.0, -2.0, 0.3),
        // In the catalog, but has no body to spawn yet.
        CharacterEntry::new("riverSpirit".to_owned(), "River Spirit".to_owned(), None),
    ];

    (locations, characters)
}

#[cfg(test)]
mod tests {
    use crate::registry::WorldRegistry;
    use crate::spawn::SpawnIndex;

    use super::*;

    #[test]
    fn seed_catalog_builds_a_registry() {
        let (locations, characters) = starting_catalog();
        let registry = WorldRegistry::new(locations, characters);
        assert!(registry.is_ok());
        let Ok(registry) = registry else { return };
        assert_eq!(registry.location_count(), 5);
        assert!(registry.lookup_location("holyTree").is_some());
        assert!(registry.lookup_character("lionGladiator").is_some());
    }

    #[tokio::test]
    async fn seed_catalog_spawns_only_templated_characters() {
        let (locations, characters) = starting_catalog();
        let spawnable = characters.iter().filter(|c| c.is_spawnable()).count();
        let Ok(registry) = WorldRegistry::new(locations, characters) else {
            return;
        };
        let index = SpawnIndex::spawn_all(&registry);
        assert_eq!(index.len(), spawnable);
        assert!(index.lookup_spawned("riverSpirit").is_none());
    }
}
