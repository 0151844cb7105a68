// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./tubetrack.toml` > `~/.config/tubetrack/tubetrack.toml`
//! > `/etc/tubetrack/tubetrack.toml` with environment variable overrides via
//! the `TUBETRACK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TubetrackConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tubetrack/tubetrack.toml` (system-wide)
/// 3. `~/.config/tubetrack/tubetrack.toml` (user XDG config)
/// 4. `./tubetrack.toml` (local directory)
/// 5. `TUBETRACK_*` environment variables
pub fn load_config() -> Result<TubetrackConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
pub fn load_config_from_str(toml_content: &str) -> Result<TubetrackConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TubetrackConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TubetrackConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TubetrackConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TubetrackConfig::default()))
        .merge(Toml::file("/etc/tubetrack/tubetrack.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tubetrack/tubetrack.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tubetrack.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `TUBETRACK_YOUTUBE_API_KEY` must map to
/// `youtube.api_key`, not `youtube.api.key`.
fn env_provider() -> Env {
    Env::prefixed("TUBETRACK_").map(|key| {
        // `key` arrives with the prefix stripped but in the env var's
        // original casing, e.g. TUBETRACK_STORAGE_DATABASE_PATH ->
        // "STORAGE_DATABASE_PATH"; lowercase before the section mapping.
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("server_", "server.", 1)
            .replacen("youtube_", "youtube.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("tracker_", "tracker.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_string_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[storage]
database_path = "/tmp/tt.db"
wal_mode = false
"#,
        )
        .unwrap();
        assert_eq!(config.storage.database_path, "/tmp/tt.db");
        assert!(!config.storage.wal_mode);
    }

    #[test]
    fn env_vars_override_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "tubetrack.toml",
                r#"
[youtube]
api_key = "from-file"

[tracker]
utc_offset_hours = 7
"#,
            )?;
            jail.set_env("TUBETRACK_YOUTUBE_API_KEY", "from-env");
            jail.set_env("TUBETRACK_TRACKER_UTC_OFFSET_HOURS", "9");
            // Underscores inside the key name must survive the section split.
            jail.set_env("TUBETRACK_STORAGE_DATABASE_PATH", "/tmp/env.db");

            let config: TubetrackConfig = build_figment().extract()?;
            assert_eq!(config.youtube.api_key.as_deref(), Some("from-env"));
            assert_eq!(config.tracker.utc_offset_hours, 9);
            assert_eq!(config.storage.database_path, "/tmp/env.db");
            Ok(())
        });
    }
}
