// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tubetrack serve` command implementation.
//!
//! Wires the YouTube provider, SQLite store, channel registry, and summary
//! engine together and serves the HTTP API until interrupted.

use std::sync::Arc;

use tracing::{error, info};

use tubetrack_config::model::TubetrackConfig;
use tubetrack_core::clock::FixedOffsetClock;
use tubetrack_core::TubetrackError;
use tubetrack_gateway::{GatewayState, ServerConfig};
use tubetrack_storage::SqliteStore;
use tubetrack_tracker::{ChannelRegistry, SummaryEngine};
use tubetrack_youtube::{YouTubeClient, YouTubeProvider};

/// Runs the `tubetrack serve` command.
pub async fn run_serve(config: TubetrackConfig) -> Result<(), TubetrackError> {
    init_tracing(&config.server.log_level);

    info!("starting tubetrack serve");

    let api_key = config.youtube.api_key.clone().ok_or_else(|| {
        TubetrackError::Config(
            "youtube.api_key is required to serve; set it in the config file \
             or via TUBETRACK_YOUTUBE_API_KEY"
                .to_string(),
        )
    })?;

    let store = Arc::new(
        SqliteStore::open(&config.storage.database_path, config.storage.wal_mode).await?,
    );
    info!(path = %config.storage.database_path, "storage ready");

    let client = YouTubeClient::new(api_key, config.youtube.api_base.clone())?;
    let provider = Arc::new(YouTubeProvider::new(client));
    let clock = Arc::new(FixedOffsetClock::new(config.tracker.utc_offset_hours));

    let registry = Arc::new(ChannelRegistry::new(
        store.clone(),
        store.clone(),
        provider,
        clock.clone(),
    ));
    let summary = Arc::new(SummaryEngine::new(store.clone()));

    let state = GatewayState {
        registry,
        summary,
        clock,
        api_key_configured: true,
        start_time: std::time::Instant::now(),
    };
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    tokio::select! {
        result = tubetrack_gateway::start_server(&server_config, state) => {
            if let Err(e) = &result {
                error!(error = %e, "gateway server exited with error");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    store.close().await?;
    info!("tubetrack serve shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tubetrack={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
