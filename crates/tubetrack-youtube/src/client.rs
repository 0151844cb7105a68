// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the YouTube Data API v3.
//!
//! Provides [`YouTubeClient`] which handles request construction, API key
//! authentication, and transient error retry. Endpoint semantics (batching,
//! not-found handling) live in the [`crate::YouTubeProvider`] layer above.

use std::time::Duration;

use tracing::{debug, warn};

use tubetrack_core::TubetrackError;

use crate::types::{ApiErrorResponse, ChannelListResponse, SearchListResponse};

/// Base URL for the YouTube Data API.
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// HTTP client for YouTube Data API communication.
///
/// Manages connection pooling, request timeouts, and retry logic for
/// transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_retries: u32,
}

impl YouTubeClient {
    /// Creates a new YouTube API client.
    ///
    /// `base_url` overrides the production endpoint; pass `None` outside of
    /// tests.
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self, TubetrackError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TubetrackError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| API_BASE_URL.to_string()),
            max_retries: 1,
        })
    }

    /// Search for a channel by free-text query, returning at most one result.
    pub async fn search_channel(&self, query: &str) -> Result<SearchListResponse, TubetrackError> {
        let url = format!("{}/search", self.base_url);
        let params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "channel"),
            ("maxResults", "1"),
            ("key", self.api_key.as_str()),
        ];
        self.get_json(&url, &params).await
    }

    /// Fetch snippet and statistics for up to one request's worth of ids.
    ///
    /// The caller is responsible for keeping `ids` within the API's per-call
    /// limit; this method just joins them.
    pub async fn list_channels(&self, ids: &[String]) -> Result<ChannelListResponse, TubetrackError> {
        let url = format!("{}/channels", self.base_url);
        let joined = ids.join(",");
        let params = [
            ("part", "snippet,statistics"),
            ("id", joined.as_str()),
            ("key", self.api_key.as_str()),
        ];
        self.get_json(&url, &params).await
    }

    /// Issue a GET, retrying once on transient statuses, and decode the body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TubetrackError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, url, "retrying request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .get(url)
                .query(params)
                .send()
                .await
                .map_err(|e| TubetrackError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, url, "provider response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| TubetrackError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| TubetrackError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient provider error, will retry");
                last_error = Some(TubetrackError::provider(format!(
                    "API returned {status}: {body}"
                )));
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "YouTube API error ({}): {}",
                    api_err.error.code, api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(TubetrackError::provider(message));
        }

        Err(last_error
            .unwrap_or_else(|| TubetrackError::provider("request failed after retries")))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
