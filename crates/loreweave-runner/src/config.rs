//! Runner configuration, loaded from environment variables.
//!
//! Every variable has a default, so a bare run against a local storyteller
//! works without setup. Connection settings live in
//! [`loreweave_client::ClientConfig`]; this adds the pipeline timing and
//! movement tuning. All numeric variables are validated up front, because a
//! bad value that slips through only surfaces later inside a detached
//! movement task.

use std::str::FromStr;
use std::time::Duration;

use loreweave_client::ClientConfig;
use loreweave_world::{MovementConfig, WanderConfig};

use crate::error::PipelineError;

/// Complete runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Storyteller connection settings.
    pub client: ClientConfig,
    /// Lower bound of the random wait between event cycles.
    pub interval_min: Duration,
    /// Upper bound of the random wait between event cycles.
    pub interval_max: Duration,
    /// Movement tuning for dispatched walks.
    pub movement: MovementConfig,
    /// Tuning for the ambient wander between events.
    pub wander: WanderConfig,
}

impl RunnerConfig {
    /// Load configuration from the environment.
    ///
    /// Variables (all optional):
    /// - `LOREWEAVE_SERVER_URL`, `LOREWEAVE_API_KEY` -- see [`ClientConfig`]
    /// - `EVENT_INTERVAL_MIN_SECS` -- minimum wait between cycles (default 30)
    /// - `EVENT_INTERVAL_MAX_SECS` -- maximum wait between cycles (default 60)
    /// - `MOVE_SPEED` -- walk speed in units per second (default 2.0)
    /// - `MOVE_TICK_MS` -- movement update cadence (default 50)
    /// - `ARRIVAL_EPSILON` -- snap distance at the target (default 0.1)
    /// - `WANDER_MIN_MOVE_SECS` / `WANDER_MAX_MOVE_SECS` -- ambient wander
    ///   move-phase bounds (defaults 1 and 3)
    /// - `WANDER_MIN_IDLE_SECS` / `WANDER_MAX_IDLE_SECS` -- ambient wander
    ///   idle-phase bounds (defaults 1 and 6)
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] when a variable does not parse or a
    /// validated bound is out of range.
    pub fn from_env() -> Result<Self, PipelineError> {
        let client = ClientConfig::from_env();

        let interval_min_secs: f64 = env_or("EVENT_INTERVAL_MIN_SECS", "30")?;
        let interval_max_secs: f64 = env_or("EVENT_INTERVAL_MAX_SECS", "60")?;
        validate_range(
            "EVENT_INTERVAL_MIN_SECS",
            "EVENT_INTERVAL_MAX_SECS",
            interval_min_secs,
            interval_max_secs,
        )?;

        let speed: f32 = env_or("MOVE_SPEED", "2.0")?;
        let tick_ms: u64 = env_or("MOVE_TICK_MS", "50")?;
        let arrival_epsilon: f32 = env_or("ARRIVAL_EPSILON", "0.1")?;
        validate_movement(speed, tick_ms, arrival_epsilon)?;

        let wander_min_move: f64 = env_or("WANDER_MIN_MOVE_SECS", "1")?;
        let wander_max_move: f64 = env_or("WANDER_MAX_MOVE_SECS", "3")?;
        validate_range(
            "WANDER_MIN_MOVE_SECS",
            "WANDER_MAX_MOVE_SECS",
            wander_min_move,
            wander_max_move,
        )?;

        let wander_min_idle: f64 = env_or("WANDER_MIN_IDLE_SECS", "1")?;
        let wander_max_idle: f64 = env_or("WANDER_MAX_IDLE_SECS", "6")?;
        validate_range(
            "WANDER_MIN_IDLE_SECS",
            "WANDER_MAX_IDLE_SECS",
            wander_min_idle,
            wander_max_idle,
        )?;

        let tick = Duration::from_millis(tick_ms);
        Ok(Self {
            client,
            interval_min: Duration::from_secs_f64(interval_min_secs),
            interval_max: Duration::from_secs_f64(interval_max_secs),
            movement: MovementConfig {
                speed,
                tick,
                arrival_epsilon,
            },
            wander: WanderConfig {
                speed,
                tick,
                min_move: Duration::from_secs_f64(wander_min_move),
                max_move: Duration::from_secs_f64(wander_max_move),
                min_idle: Duration::from_secs_f64(wander_min_idle),
                max_idle: Duration::from_secs_f64(wander_max_idle),
            },
        })
    }
}

/// Check that a pair of duration bounds forms a usable range.
fn validate_range(
    min_name: &str,
    max_name: &str,
    min_secs: f64,
    max_secs: f64,
) -> Result<(), PipelineError> {
    if !min_secs.is_finite() || min_secs < 0.0 {
        return Err(PipelineError::Config(format!(
            "{min_name} must be a non-negative number, got {min_secs}"
        )));
    }
    if !max_secs.is_finite() || max_secs < min_secs {
        return Err(PipelineError::Config(format!(
            "{max_name} ({max_secs}) must be >= {min_name} ({min_secs})"
        )));
    }
    Ok(())
}

/// Check that movement tuning cannot stall or break a walk.
///
/// A zero tick would make the movement ticker unusable, and a non-positive
/// speed would step a walk away from its target forever.
fn validate_movement(speed: f32, tick_ms: u64, arrival_epsilon: f32) -> Result<(), PipelineError> {
    if tick_ms == 0 {
        return Err(PipelineError::Config(
            "MOVE_TICK_MS must be at least 1".to_owned(),
        ));
    }
    if !speed.is_finite() || speed <= 0.0 {
        return Err(PipelineError::Config(format!(
            "MOVE_SPEED must be a positive number, got {speed}"
        )));
    }
    if !arrival_epsilon.is_finite() || arrival_epsilon < 0.0 {
        return Err(PipelineError::Config(format!(
            "ARRIVAL_EPSILON must be a non-negative number, got {arrival_epsilon}"
        )));
    }
    Ok(())
}

/// Read an environment variable, falling back to a default, and parse it.
fn env_or<T: FromStr>(name: &str, default: &str) -> Result<T, PipelineError>
where
    T::Err: std::fmt::Display,
{
    std::env::var(name)
        .unwrap_or_else(|_| default.to_owned())
        .parse()
        .map_err(|e| PipelineError::Config(format!("invalid {name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds_accept_valid_range() {
        assert!(validate_range("MIN", "MAX", 30.0, 60.0).is_ok());
        assert!(validate_range("MIN", "MAX", 5.0, 5.0).is_ok());
        assert!(validate_range("MIN", "MAX", 0.0, 0.0).is_ok());
    }

    #[test]
    fn interval_bounds_reject_inverted_range() {
        assert!(validate_range("MIN", "MAX", 60.0, 30.0).is_err());
    }

    #[test]
    fn interval_bounds_reject_negative_or_nan() {
        assert!(validate_range("MIN", "MAX", -1.0, 10.0).is_err());
        assert!(validate_range("MIN", "MAX", f64::NAN, 10.0).is_err());
        assert!(validate_range("MIN", "MAX", 0.0, f64::NAN).is_err());
    }

    #[test]
    fn movement_accepts_defaults() {
        assert!(validate_movement(2.0, 50, 0.1).is_ok());
    }

    #[test]
    fn movement_rejects_zero_tick() {
        // A zero tick would never advance a walk; it must be refused before
        // any task is spawned with it.
        assert!(validate_movement(2.0, 0, 0.1).is_err());
    }

    #[test]
    fn movement_rejects_non_positive_speed() {
        assert!(validate_movement(0.0, 50, 0.1).is_err());
        assert!(validate_movement(-2.0, 50, 0.1).is_err());
        assert!(validate_movement(f32::NAN, 50, 0.1).is_err());
        assert!(validate_movement(f32::INFINITY, 50, 0.1).is_err());
    }

    #[test]
    fn movement_rejects_negative_epsilon() {
        assert!(validate_movement(2.0, 50, -0.1).is_err());
        assert!(validate_movement(2.0, 50, f32::NAN).is_err());
        // Zero epsilon is allowed: the step function itself snaps exactly.
        assert!(validate_movement(2.0, 50, 0.0).is_ok());
    }

    #[test]
    fn defaults_parse_to_expected_values() {
        // The defaults baked into from_env, parsed the same way.
        let min: Result<f64, _> = "30".parse();
        let max: Result<f64, _> = "60".parse();
        assert_eq!(min.ok(), Some(30.0));
        assert_eq!(max.ok(), Some(60.0));
    }
}
