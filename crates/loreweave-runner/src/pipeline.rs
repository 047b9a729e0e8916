//! The event pipeline: the loop that turns storyteller output into world
//! mutations.
//!
//! One cycle per random interval:
//!
//! 1. Sleep a uniform random duration in the configured range.
//! 2. Request a new event, awaiting that request's own result.
//! 3. Validate: non-empty, fence-stripped, parses as an event.
//! 4. Resolve the referenced character and location against the registry
//!    and spawn index. The first miss aborts the cycle; later lookups are
//!    not attempted and lore is left untouched.
//! 5. Mutate: walk the character to the location (preserving its depth) and
//!    kick off a detached lore revision around the event's explanation.
//! 6. Loop, without waiting for the walk or the revision.
//!
//! Between cycles, live characters follow their ambient wander; a character
//! the storyteller has placed stops wandering and holds its placement.
//!
//! No failure in a cycle is fatal; every error path degrades to "skip this
//! cycle, try again next interval".

use std::sync::Arc;
use std::time::Duration;

use loreweave_client::{LoreState, StoryClient};
use loreweave_types::{Vec2, Vec3, WorldEvent};
use loreweave_world::{MovementSet, SpawnIndex, SpawnedCharacter, WorldRegistry};
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::RunnerConfig;
use crate::error::PipelineError;
use crate::parse::parse_event;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Why an event failed to resolve against the world.
///
/// The variants mirror the lookup order: character in the catalog, then its
/// live instance, then the location. A cycle aborts on the first miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The event names a character the catalog does not know.
    #[error("no catalog character for id '{0}'")]
    UnknownCharacter(String),

    /// The character exists in the catalog but was never spawned.
    #[error("no spawned instance for id '{0}'")]
    NotSpawned(String),

    /// The event names a location the catalog does not know.
    #[error("no catalog location for id '{0}'")]
    UnknownLocation(String),
}

/// A fully resolved relocation: the live instance and where it is headed.
#[derive(Debug)]
pub struct ResolvedMove {
    /// The live character to relocate.
    pub instance: Arc<SpawnedCharacter>,
    /// The location's 2D target point; depth comes from the instance.
    pub target: Vec2,
    /// Location id as authored, for logging.
    pub location_id: String,
}

/// Resolve an event's references against the registry and spawn index.
///
/// Lookup order is fixed: catalog character, live instance, then location.
/// The first miss returns without attempting the later lookups.
pub fn resolve_event(
    registry: &WorldRegistry,
    spawns: &SpawnIndex,
    event: &WorldEvent,
) -> Result<ResolvedMove, ResolveError> {
    let entry = registry
        .lookup_character(&event.character)
        .ok_or_else(|| ResolveError::UnknownCharacter(event.character.clone()))?;

    let instance = spawns
        .lookup_spawned(&entry.id)
        .ok_or_else(|| ResolveError::NotSpawned(entry.id.clone()))?;

    let location = registry
        .lookup_location(&event.location)
        .ok_or_else(|| ResolveError::UnknownLocation(event.location.clone()))?;

    Ok(ResolvedMove {
        instance,
        target: location.target_position,
        location_id: location.id.clone(),
    })
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The event-driven world-update pipeline.
///
/// Holds everything a cycle needs; constructed once in `main` with its
/// collaborators passed in.
pub struct EventPipeline {
    client: Arc<StoryClient>,
    registry: Arc<WorldRegistry>,
    spawns: Arc<SpawnIndex>,
    lore: Arc<LoreState>,
    movement: MovementSet,
    interval_min: Duration,
    interval_max: Duration,
}

impl EventPipeline {
    /// Create the pipeline from its collaborators and configuration.
    pub fn new(
        client: Arc<StoryClient>,
        registry: Arc<WorldRegistry>,
        spawns: Arc<SpawnIndex>,
        lore: Arc<LoreState>,
        config: &RunnerConfig,
    ) -> Self {
        Self {
            client,
            registry,
            spawns,
            lore,
            movement: MovementSet::new(config.movement, config.wander),
            interval_min: config.interval_min,
            interval_max: config.interval_max,
        }
    }

    /// Run the pipeline forever.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::World`] if the catalog snapshot cannot be
    /// serialized at startup; after that, nothing is fatal.
    pub async fn run(mut self) -> Result<(), PipelineError> {
        // The catalog is immutable, so its snapshot is serialized once.
        let game_data = self.registry.snapshot_json()?;

        // Every live character drifts ambiently until the storyteller first
        // places it; a dispatched walk supersedes the wander for good.
        let spawns = Arc::clone(&self.spawns);
        for instance in spawns.instances() {
            self.movement.start_wander(Arc::clone(instance));
        }

        info!(
            wandering = self.movement.len(),
            interval_min_secs = self.interval_min.as_secs_f64(),
            interval_max_secs = self.interval_max.as_secs_f64(),
            "event pipeline running"
        );

        loop {
            tokio::time::sleep(self.draw_interval()).await;
            self.cycle(&game_data).await;
        }
    }

    /// Draw the wait before the next cycle, uniform over the configured range.
    fn draw_interval(&self) -> Duration {
        if self.interval_max <= self.interval_min {
            return self.interval_min;
        }
        let secs = rand::rng()
            .random_range(self.interval_min.as_secs_f64()..=self.interval_max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }

    /// One full cycle: request, validate, resolve, mutate.
    async fn cycle(&mut self, game_data: &str) {
        let lore = self.lore.current().await;

        let raw = match self.client.generate_event(&lore, game_data).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "event generation failed, skipping cycle");
                return;
            }
        };

        if raw.trim().is_empty() {
            warn!("storyteller returned an empty event payload, skipping cycle");
            return;
        }

        let event = match parse_event(&raw) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, raw_payload = raw.as_str(), "malformed event payload, skipping cycle");
                return;
            }
        };

        self.apply_event(&event).await;
    }

    /// Resolve an event and, on success, trigger the world mutation.
    async fn apply_event(&mut self, event: &WorldEvent) {
        let resolved = match resolve_event(&self.registry, &self.spawns, event) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "event did not resolve, skipping cycle");
                return;
            }
        };

        // Target keeps the instance's own depth; the catalog only knows x/y.
        let current = resolved.instance.position().await;
        let target = Vec3::from_xy(resolved.target, current.z);

        info!(
            character = %resolved.instance.key(),
            location = resolved.location_id.as_str(),
            event_type = event.event_type.as_str(),
            "relocating character"
        );
        self.movement
            .dispatch(Arc::clone(&resolved.instance), target);

        // Revise the lore around the event without holding the cycle open.
        // On failure the prior lore stands.
        let client = Arc::clone(&self.client);
        let lore = Arc::clone(&self.lore);
        let explanation = event.event_explanation.clone();
        tokio::spawn(async move {
            let current = lore.current().await;
            match client.generate_lore(&explanation, &current).await {
                Ok(next) => lore.replace(next).await,
                Err(e) => warn!(error = %e, "lore revision failed, keeping prior lore"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use loreweave_client::ClientConfig;
    use loreweave_world::starting_catalog;

    use super::*;

    fn world() -> Option<(Arc<WorldRegistry>, Arc<SpawnIndex>)> {
        let (locations, characters) = starting_catalog();
        let registry = Arc::new(WorldRegistry::new(locations, characters).ok()?);
        let spawns = Arc::new(SpawnIndex::spawn_all(&registry));
        Some((registry, spawns))
    }

    fn test_pipeline(
        registry: Arc<WorldRegistry>,
        spawns: Arc<SpawnIndex>,
        lore: Arc<LoreState>,
    ) -> EventPipeline {
        // Port 9 is the discard port; nothing listens there, so any request
        // a test accidentally triggers fails fast instead of hanging.
        let config = RunnerConfig {
            client: ClientConfig::new("http://127.0.0.1:9".to_owned(), "test-key".to_owned()),
            interval_min: Duration::from_secs(1),
            interval_max: Duration::from_secs(2),
            movement: loreweave_world::MovementConfig::default(),
            wander: loreweave_world::WanderConfig::default(),
        };
        EventPipeline::new(
            Arc::new(StoryClient::new(&config.client)),
            registry,
            spawns,
            lore,
            &config,
        )
    }

    fn event(character: &str, location: &str) -> WorldEvent {
        WorldEvent {
            event_type: "moves".to_owned(),
            location: location.to_owned(),
            character: character.to_owned(),
            event_explanation: "Something stirs.".to_owned(),
        }
    }

    #[test]
    fn resolve_unknown_character_aborts_first() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        // Location is valid; the character miss must win because it is
        // checked first.
        let result = resolve_event(&registry, &spawns, &event("shadowKing", "holyTree"));
        assert_eq!(
            result.err(),
            Some(ResolveError::UnknownCharacter("shadowKing".to_owned()))
        );
    }

    #[test]
    fn resolve_unspawned_character_stops_before_location() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        // riverSpirit is catalogued without a template, and the location is
        // bogus; the spawn miss is reported, proving lookup order.
        let result = resolve_event(&registry, &spawns, &event("riverSpirit", "nowhere"));
        assert_eq!(
            result.err(),
            Some(ResolveError::NotSpawned("riverSpirit".to_owned()))
        );
    }

    #[test]
    fn resolve_unknown_location_reported_last() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        let result = resolve_event(&registry, &spawns, &event("lionGladiator", "sunkenCrypt"));
        assert_eq!(
            result.err(),
            Some(ResolveError::UnknownLocation("sunkenCrypt".to_owned()))
        );
    }

    #[test]
    fn resolve_normalizes_both_identifiers() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        let result = resolve_event(&registry, &spawns, &event(" LIONGLADIATOR ", "HolyTree"));
        assert!(result.is_ok());
        if let Ok(resolved) = result {
            assert_eq!(resolved.location_id, "holyTree");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unresolved_event_mutates_nothing() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        let lore = Arc::new(LoreState::new("the old tales"));
        let mut pipeline = test_pipeline(registry, spawns, Arc::clone(&lore));

        pipeline.apply_event(&event("shadowKing", "holyTree")).await;

        assert!(pipeline.movement.is_empty());
        assert_eq!(lore.current().await, "the old tales");
    }

    #[tokio::test(start_paused = true)]
    async fn resolved_event_walks_character_to_location() {
        let Some((registry, spawns)) = world() else {
            return;
        };
        let Some(instance) = spawns.lookup_spawned("lionGladiator") else {
            return;
        };
        let spawn_depth = instance.position().await.z;

        let lore = Arc::new(LoreState::new("the old tales"));
        let mut pipeline = test_pipeline(Arc::clone(&registry), spawns, Arc::clone(&lore));

        pipeline.apply_event(&event("lionGladiator", "holyTree")).await;
        assert_eq!(pipeline.movement.len(), 1);

        let Some(location) = registry.lookup_location("holyTree") else {
            return;
        };
        let target = Vec3::from_xy(location.target_position, spawn_depth);

        // Walk to completion under virtual time.
        for _ in 0..2000 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            if instance.position().await == target {
                break;
            }
        }
        assert_eq!(instance.position().await, target);

        // The lore revision went to a dead endpoint; the prior lore stands.
        assert_eq!(lore.current().await, "the old tales");
    }
}
