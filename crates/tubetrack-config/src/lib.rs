// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the tubetrack channel tracker.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and diagnostic error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use tubetrack_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("binding {}:{}", config.server.host, config.server.port);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TubetrackConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a figment deserialization failure, the error is converted into rich
/// miette diagnostics carrying source spans and typo suggestions.
pub fn load_and_validate() -> Result<TubetrackConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<TubetrackConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string("tubetrack.toml") {
        let path = std::env::current_dir()
            .map(|d| d.join("tubetrack.toml").display().to_string())
            .unwrap_or_else(|_| "tubetrack.toml".to_string());
        sources.push((path, content));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("tubetrack/tubetrack.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = std::path::Path::new("/etc/tubetrack/tubetrack.toml");
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_toml_loads_and_validates() {
        let config = load_and_validate_str(
            r#"
[server]
port = 8080

[youtube]
api_key = "test-key"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.youtube.api_key.as_deref(), Some("test-key"));
        // Untouched sections keep their defaults.
        assert_eq!(config.tracker.utc_offset_hours, 7);
    }

    #[test]
    fn unknown_key_yields_diagnostic() {
        let errors = load_and_validate_str(
            r#"
[server]
prot = 8080
"#,
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "prot")));
    }
}
