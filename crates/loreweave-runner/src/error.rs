//! Error types for the event pipeline runner.
//!
//! Most failures in the pipeline are per-cycle and handled inline with a
//! warning; these types cover the paths that propagate.

use loreweave_world::WorldError;
use thiserror::Error;

/// Errors raised by the pipeline runner.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The event payload could not be parsed, even after fence stripping.
    #[error("event payload parse error: {0}")]
    Parse(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// World-state construction or serialization failed.
    #[error(transparent)]
    World(#[from] WorldError),
}
