//! Runner entry point for the Loreweave world client.
//!
//! Wires the pieces together and runs the event pipeline. The world is built
//! bottom-up: catalog -> registry -> spawn index, then the storyteller
//! client and the shared lore state, then the pipeline that owns the loop.
//!
//! ```text
//! interval -> /generate_event -> parse -> resolve -> move + /generate_lore
//! ```
//!
//! Nothing downstream of startup is fatal: a failed cycle is logged and the
//! next interval tries again.

mod config;
mod error;
mod parse;
mod pipeline;

use std::sync::Arc;

use loreweave_client::{LoreState, StoryClient};
use loreweave_world::{SpawnIndex, WorldRegistry, starting_catalog};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::RunnerConfig;
use crate::pipeline::EventPipeline;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// builds the world, seeds the initial lore, then runs the event pipeline
/// indefinitely.
///
/// # Errors
///
/// Returns an error if configuration or world construction fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("loreweave-runner starting");

    let config = RunnerConfig::from_env()?;
    info!(
        server_url = config.client.base_url,
        interval_min_secs = config.interval_min.as_secs_f64(),
        interval_max_secs = config.interval_max.as_secs_f64(),
        move_speed = config.movement.speed,
        "configuration loaded"
    );

    // Build the world: registry first, then the live instances.
    let (locations, characters) = starting_catalog();
    let registry = Arc::new(WorldRegistry::new(locations, characters)?);
    info!(locations = registry.location_count(), "world registry built");

    let spawns = Arc::new(SpawnIndex::spawn_all(&registry));

    let client = Arc::new(StoryClient::new(&config.client));
    let lore = Arc::new(LoreState::default());

    // Seed the initial lore before the first event cycle. A failure here is
    // not fatal; the pipeline starts with empty lore and the service fills
    // it in on the first revision.
    match client.generate_lore("", &lore.current().await).await {
        Ok(seed) => {
            lore.replace(seed).await;
            info!("initial lore seeded");
        }
        Err(e) => warn!(error = %e, "initial lore seed failed, starting with empty lore"),
    }

    let pipeline = EventPipeline::new(client, registry, spawns, lore, &config);
    info!("event pipeline initialized, entering world loop");
    pipeline.run().await?;

    Ok(())
}
