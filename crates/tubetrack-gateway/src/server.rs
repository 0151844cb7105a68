// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the tracker API.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;

use tubetrack_core::clock::Clock;
use tubetrack_core::TubetrackError;
use tubetrack_tracker::{ChannelRegistry, SummaryEngine};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Channel registry behind the channel CRUD and list endpoints.
    pub registry: Arc<ChannelRegistry>,
    /// Daily growth aggregation engine.
    pub summary: Arc<SummaryEngine>,
    /// Clock used to default the summary day.
    pub clock: Arc<dyn Clock>,
    /// Whether a provider API key was configured; surfaced by /api/health.
    pub api_key_configured: bool,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Gateway server configuration (mirrors ServerConfig from tubetrack-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the API router. Exposed separately from [`start_server`] so tests
/// can drive it without binding a socket.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/channel", post(handlers::post_channel))
        .route("/api/channels", get(handlers::get_channels))
        .route("/api/daily-summary", get(handlers::get_daily_summary))
        .route(
            "/api/channel/{channel_id}/note",
            patch(handlers::patch_channel_note),
        )
        .route("/api/channel/{channel_id}", delete(handlers::delete_channel))
        .route("/api/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), TubetrackError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TubetrackError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| TubetrackError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3002,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
        assert!(debug.contains("3002"));
    }
}
