//! The spawn index: live character instances keyed by normalized id.
//!
//! Built once, immediately after the registry, by instantiating every
//! catalog character that carries a template. The index is immutable for the
//! life of the process; there is no despawn or respawn lifecycle.
//!
//! A [`SpawnedCharacter`]'s position sits behind an async mutex because a
//! movement task writes it while the pipeline reads it to preserve the depth
//! component of a new target.

use std::collections::BTreeMap;
use std::sync::Arc;

use loreweave_types::{CharacterKey, Vec3};
use tokio::sync::Mutex;
use tracing::info;

use crate::registry::WorldRegistry;

/// A live character instance in the world.
#[derive(Debug)]
pub struct SpawnedCharacter {
    key: CharacterKey,
    name: String,
    position: Mutex<Vec3>,
}

impl SpawnedCharacter {
    /// Create a live instance at its spawn position.
    pub const fn new(key: CharacterKey, name: String, position: Vec3) -> Self {
        Self {
            key,
            name,
            position: Mutex::const_new(position),
        }
    }

    /// The normalized catalog key this instance was spawned under.
    pub const fn key(&self) -> &CharacterKey {
        &self.key
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the current position.
    pub async fn position(&self) -> Vec3 {
        *self.position.lock().await
    }

    /// Overwrite the current position.
    pub async fn set_position(&self, position: Vec3) {
        *self.position.lock().await = position;
    }
}

/// Runtime mapping from character key to live instance.
#[derive(Debug, Default)]
pub struct SpawnIndex {
    spawned: BTreeMap<CharacterKey, Arc<SpawnedCharacter>>,
}

impl SpawnIndex {
    /// Instantiate every spawnable character in the registry.
    ///
    /// Entries without a template are skipped; they exist in the catalog but
    /// never get a live instance.
    pub fn spawn_all(registry: &WorldRegistry) -> Self {
        let mut spawned = BTreeMap::new();
        for (key, entry) in registry.characters() {
            let Some(template) = &entry.template else {
                continue;
            };
            let instance = Arc::new(SpawnedCharacter::new(
                key.clone(),
                entry.name.clone(),
                template.spawn_position,
            ));
            spawned.insert(key.clone(), instance);
        }
        info!(spawned = spawned.len(), "world characters instantiated");
        Self { spawned }
    }

    /// Look up a live instance by raw identifier.
    ///
    /// Normalizes the input; returns `None` for empty ids, unknown
    /// characters, and catalogued characters that were never spawnable.
    pub fn lookup_spawned(&self, id: &str) -> Option<Arc<SpawnedCharacter>> {
        let key = CharacterKey::parse(id)?;
        self.spawned.get(&key).cloned()
    }

    /// Iterate over every live instance.
    pub fn instances(&self) -> impl Iterator<Item = &Arc<SpawnedCharacter>> {
        self.spawned.values()
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.spawned.len()
    }

    /// Whether nothing was spawned.
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
    }
}
