//! Replay Sample Application Entry Point
//!
//! Runs the sample Read/Write programs through both freefold interpreters
//! and prints what each produced.

use replay::{ReplayConfig, replay, scenarios};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Replay Sample Application...");

    let config = match ReplayConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: first_write={}, second_write={}",
                config.first_write,
                config.second_write
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            ReplayConfig::default()
        }
    };

    for scenario in scenarios(config) {
        let outcome = replay(scenario);
        tracing::info!(name = outcome.name, "scenario finished");
        println!(
            "{:<20} every={:?} latest={:?}",
            outcome.name, outcome.every, outcome.latest
        );
    }

    tracing::info!("Replay Sample Application finished");
}
