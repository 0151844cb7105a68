// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints serde attributes cannot express, such as
//! a plausible bind address, a sane fixed-timezone offset, and a known log
//! level. Collects every failure instead of stopping at the first.

use crate::diagnostic::ConfigError;
use crate::model::TubetrackConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TubetrackConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join("/"),
                config.server.log_level
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // Real-world UTC offsets span -12..+14; anything outside is a typo.
    let offset = config.tracker.utc_offset_hours;
    if !(-12..=14).contains(&offset) {
        errors.push(ConfigError::Validation {
            message: format!(
                "tracker.utc_offset_hours must be between -12 and 14, got {offset}"
            ),
        });
    }

    if let Some(key) = &config.youtube.api_key {
        if key.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "youtube.api_key must not be an empty string; omit it instead"
                    .to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
