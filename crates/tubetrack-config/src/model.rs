// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the tubetrack channel tracker.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup with actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level tubetrack configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; only `youtube.api_key` is required to actually serve.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TubetrackConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// YouTube Data API settings.
    #[serde(default)]
    pub youtube: YoutubeConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Day-boundary and refresh settings.
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3002
}

fn default_log_level() -> String {
    "info".to_string()
}

/// YouTube Data API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct YoutubeConfig {
    /// API key. `None` is accepted at load time so `--help` and config
    /// inspection work without credentials; serving requires it.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override of the API base URL. Intended for tests against a local
    /// mock server; the real endpoint is the default.
    #[serde(default)]
    pub api_base: Option<String>,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("tubetrack").join("tubetrack.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "tubetrack.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Day-boundary configuration for caching and snapshotting.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Fixed offset, in whole hours east of UTC, used to compute "today".
    /// The cache key and snapshot keys both derive from this single offset.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

fn default_utc_offset_hours() -> i32 {
    7
}
