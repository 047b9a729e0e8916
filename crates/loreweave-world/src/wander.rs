//! Ambient idle wander for live characters.
//!
//! Between storyteller events, characters are not statues: each one drifts
//! through a two-state loop, walking a straight line in a random direction
//! for a random duration, then idling for a random duration. The depth
//! component never changes; wander is flat movement.
//!
//! A wander task is started per spawned character at world start and runs
//! until a storyteller event supersedes it through
//! [`MovementSet::dispatch`](crate::movement::MovementSet::dispatch). Once
//! the storyteller has placed a character, the placement stands.

use std::sync::Arc;
use std::time::Duration;

use loreweave_types::{Vec2, Vec3};
use rand::Rng;

use crate::spawn::SpawnedCharacter;

/// Tuning for the ambient wander loop.
#[derive(Debug, Clone, Copy)]
pub struct WanderConfig {
    /// Linear speed in world units per second while in the move phase.
    pub speed: f32,
    /// Cadence of position updates during a move phase.
    pub tick: Duration,
    /// Shortest move phase.
    pub min_move: Duration,
    /// Longest move phase.
    pub max_move: Duration,
    /// Shortest idle phase.
    pub min_idle: Duration,
    /// Longest idle phase.
    pub max_idle: Duration,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            tick: Duration::from_millis(50),
            min_move: Duration::from_secs(1),
            max_move: Duration::from_secs(3),
            min_idle: Duration::from_secs(1),
            max_idle: Duration::from_secs(6),
        }
    }
}

/// Draw a duration uniformly from `[min, max]`.
fn draw_duration(min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    let secs = rand::rng().random_range(min.as_secs_f64()..=max.as_secs_f64());
    Duration::from_secs_f64(secs)
}

/// Wander a live instance forever: move, idle, repeat.
///
/// Never returns; intended to be spawned and later aborted when a
/// storyteller event takes over the character.
pub async fn drive_wander(instance: Arc<SpawnedCharacter>, config: WanderConfig) {
    let step = config.speed * config.tick.as_secs_f32();
    let mut ticker = tokio::time::interval(config.tick);
    // The first tick completes immediately; skip it so every step is scaled
    // by a full tick of elapsed time.
    ticker.tick().await;

    loop {
        // Move phase: a straight line in a random direction.
        let angle = rand::rng().random_range(0.0_f32..core::f32::consts::TAU);
        let direction = Vec2::new(angle.cos(), angle.sin());
        let move_for = draw_duration(config.min_move, config.max_move);

        let mut walked = Duration::ZERO;
        while walked < move_for {
            ticker.tick().await;
            walked = walked.saturating_add(config.tick);
            let current = instance.position().await;
            instance
                .set_position(Vec3::new(
                    direction.x.mul_add(step, current.x),
                    direction.y.mul_add(step, current.y),
                    current.z,
                ))
                .await;
        }

        // Idle phase.
        tokio::time::sleep(draw_duration(config.min_idle, config.max_idle)).await;
        // Drop the ticks missed while idling so the next move phase does not
        // open with a burst of catch-up steps.
        ticker.reset();
    }
}

#[cfg(test)]
mod tests {
    use loreweave_types::CharacterKey;

    use super::*;

    fn instance_at(position: Vec3) -> Option<Arc<SpawnedCharacter>> {
        let key = CharacterKey::parse("foxMinstrel")?;
        Some(Arc::new(SpawnedCharacter::new(
            key,
            "Fox Minstrel".to_owned(),
            position,
        )))
    }

    #[test]
    fn draw_duration_stays_in_bounds() {
        let min = Duration::from_secs(1);
        let max = Duration::from_secs(3);
        for _ in 0..50 {
            let drawn = draw_duration(min, max);
            assert!(drawn >= min);
            assert!(drawn <= max);
        }
        // Degenerate range collapses to the minimum.
        assert_eq!(draw_duration(max, min), max);
        assert_eq!(draw_duration(min, min), min);
    }

    #[tokio::test(start_paused = true)]
    async fn wander_leaves_the_spawn_point() {
        let start = Vec3::new(0.0, 0.0, 0.4);
        let Some(instance) = instance_at(start) else {
            return;
        };
        let handle = tokio::spawn(drive_wander(
            Arc::clone(&instance),
            WanderConfig::default(),
        ));

        // The first move phase lasts at least one second at speed 2, so by
        // the time it has certainly ended the character is well away.
        tokio::time::sleep(Duration::from_millis(3200)).await;
        let position = instance.position().await;
        assert!(position.distance(start) > 1.0);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn wander_preserves_depth() {
        let start = Vec3::new(2.0, -1.0, 0.7);
        let Some(instance) = instance_at(start) else {
            return;
        };
        let handle = tokio::spawn(drive_wander(
            Arc::clone(&instance),
            WanderConfig::default(),
        ));

        tokio::time::sleep(Duration::from_secs(20)).await;
        let position = instance.position().await;
        assert!((position.z - 0.7).abs() < 1e-6);

        handle.abort();
    }
}
