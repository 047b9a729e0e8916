//! Character movement: linear stepping toward a target point.
//!
//! Movement is a fixed-speed walk. Each tick advances the position by at
//! most `speed * tick` toward the target without ever overshooting, and the
//! walk ends by snapping exactly onto the target once within the arrival
//! epsilon. The depth component travels along untouched because the target
//! is built from the instance's own depth.
//!
//! [`MovementSet`] owns the in-flight movement tasks, at most one per
//! character: dispatching a new target for a character aborts its previous
//! task first, whether that was another walk or the ambient wander, so two
//! tasks never fight over one position.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use loreweave_types::{CharacterKey, Vec3};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::spawn::SpawnedCharacter;
use crate::wander::{WanderConfig, drive_wander};

/// Tuning for the movement walk.
#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    /// Linear speed in world units per second.
    pub speed: f32,
    /// Cadence of position updates.
    pub tick: Duration,
    /// Distance at which the walk snaps onto the target and ends.
    pub arrival_epsilon: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            tick: Duration::from_millis(50),
            arrival_epsilon: 0.1,
        }
    }
}

/// Advance `current` toward `target` by at most `max_step`.
///
/// Returns the target itself once it is within reach, so a walk built on
/// this can never overshoot and always terminates on the exact coordinates.
pub fn step_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let distance = current.distance(target);
    if distance <= max_step || distance <= f32::EPSILON {
        return target;
    }
    let fraction = max_step / distance;
    Vec3::new(
        (target.x - current.x).mul_add(fraction, current.x),
        (target.y - current.y).mul_add(fraction, current.y),
        (target.z - current.z).mul_add(fraction, current.z),
    )
}

/// Walk a live instance to a target point, one tick at a time.
///
/// Runs until arrival: once the instance is within the arrival epsilon it is
/// snapped exactly onto the target and the task ends. Intended to be spawned
/// through [`MovementSet::dispatch`], which handles superseding walks.
pub async fn drive_to_target(
    instance: Arc<SpawnedCharacter>,
    target: Vec3,
    config: MovementConfig,
) {
    let max_step = config.speed * config.tick.as_secs_f32();
    let mut ticker = tokio::time::interval(config.tick);
    // The first tick completes immediately; skip it so every step is scaled
    // by a full tick of elapsed time.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let current = instance.position().await;
        if current.distance(target) <= config.arrival_epsilon {
            instance.set_position(target).await;
            break;
        }
        instance.set_position(step_towards(current, target, max_step)).await;
    }

    debug!(character = %instance.key(), "arrived at target");
}

/// In-flight movement tasks, at most one per character.
///
/// A character's single task slot holds either its ambient wander or a
/// dispatched walk; starting one aborts the other.
#[derive(Debug, Default)]
pub struct MovementSet {
    config: MovementConfig,
    wander: WanderConfig,
    in_flight: BTreeMap<CharacterKey, JoinHandle<()>>,
}

impl MovementSet {
    /// Create an empty set with the given tuning.
    pub const fn new(config: MovementConfig, wander: WanderConfig) -> Self {
        Self {
            config,
            wander,
            in_flight: BTreeMap::new(),
        }
    }

    /// Start the ambient wander for a character.
    ///
    /// The wander runs until a dispatched walk supersedes it. Any task
    /// already in flight for the character is aborted first.
    pub fn start_wander(&mut self, instance: Arc<SpawnedCharacter>) {
        let key = instance.key().clone();
        let handle = tokio::spawn(drive_wander(instance, self.wander));
        self.replace_task(key, handle);
    }

    /// Start walking a character toward a target.
    ///
    /// Any task already in flight for the same character, wander or walk, is
    /// aborted first; the new walk starts from wherever the old task left
    /// the position.
    pub fn dispatch(&mut self, instance: Arc<SpawnedCharacter>, target: Vec3) {
        let key = instance.key().clone();
        let handle = tokio::spawn(drive_to_target(instance, target, self.config));
        self.replace_task(key, handle);
    }

    /// Install a task for a character, aborting whatever held the slot.
    fn replace_task(&mut self, key: CharacterKey, handle: JoinHandle<()>) {
        if let Some(previous) = self.in_flight.remove(&key) {
            if !previous.is_finished() {
                debug!(character = %key, "superseding in-flight movement task");
            }
            previous.abort();
        }
        self.in_flight.insert(key, handle);
    }

    /// Number of characters holding a task slot.
    ///
    /// Finished walks still count until their character is started again;
    /// use [`Self::active_count`] for tasks still running.
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether no task was ever started (or all were superseded).
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Number of tasks still running.
    pub fn active_count(&self) -> usize {
        self.in_flight
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort every in-flight task.
    pub fn abort_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.in_flight) {
            handle.abort();
        }
    }
}

impl Drop for MovementSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}
