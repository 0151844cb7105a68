// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tubetrack channel tracker.

use thiserror::Error;

/// The primary error type used across all tubetrack crates.
#[derive(Debug, Error)]
pub enum TubetrackError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// The channel URL did not match any recognized shape.
    #[error("invalid channel URL: {0}")]
    InvalidUrl(String),

    /// The requested entity does not exist (unknown channel, provider miss).
    #[error("not found: {0}")]
    NotFound(String),

    /// The channel is already tracked.
    #[error("channel already tracked: {0}")]
    DuplicateChannel(String),

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stats provider errors (API failure, transport error, timeout).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TubetrackError {
    /// Shorthand for a provider error with no underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_render_messages() {
        let e = TubetrackError::InvalidUrl("not-a-url".into());
        assert!(e.to_string().contains("not-a-url"));

        let e = TubetrackError::DuplicateChannel("UC123".into());
        assert!(e.to_string().contains("UC123"));

        let e = TubetrackError::Storage {
            source: Box::new(std::io::Error::other("disk gone")),
        };
        assert!(e.to_string().contains("disk gone"));

        let e = TubetrackError::provider("quota exceeded");
        assert!(e.to_string().contains("quota exceeded"));
    }
}
