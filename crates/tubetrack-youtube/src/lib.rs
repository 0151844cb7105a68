// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! YouTube Data API implementation of the [`StatsProvider`] trait.
//!
//! Splits transport ([`client::YouTubeClient`]) from endpoint semantics:
//! this layer owns username resolution via the search endpoint, not-found
//! mapping, and batch chunking with partial-failure tolerance.

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::{debug, warn};

use tubetrack_core::types::ChannelStats;
use tubetrack_core::{StatsProvider, TubetrackError};

pub use client::YouTubeClient;

/// Maximum channel ids per `channels` request, per the API's documented cap.
pub const MAX_BATCH: usize = 50;

/// [`StatsProvider`] backed by the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YouTubeProvider {
    client: YouTubeClient,
}

impl YouTubeProvider {
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsProvider for YouTubeProvider {
    async fn resolve_username(&self, value: &str) -> Result<String, TubetrackError> {
        let response = self.client.search_channel(value).await?;
        response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.channel_id)
            .ok_or_else(|| TubetrackError::NotFound(format!("channel `{value}`")))
    }

    async fn fetch_one(&self, channel_id: &str) -> Result<ChannelStats, TubetrackError> {
        let response = self.client.list_channels(&[channel_id.to_string()]).await?;
        response
            .items
            .into_iter()
            .next()
            .map(|item| item.into_stats())
            .ok_or_else(|| TubetrackError::NotFound(format!("channel `{channel_id}`")))
    }

    async fn fetch_batch(
        &self,
        channel_ids: &[String],
    ) -> Result<Vec<ChannelStats>, TubetrackError> {
        let mut stats = Vec::with_capacity(channel_ids.len());

        for chunk in channel_ids.chunks(MAX_BATCH) {
            match self.client.list_channels(chunk).await {
                Ok(response) => {
                    debug!(
                        requested = chunk.len(),
                        returned = response.items.len(),
                        "batch chunk fetched"
                    );
                    stats.extend(response.items.into_iter().map(|item| item.into_stats()));
                }
                Err(e) => {
                    // A transient failure for one chunk must not lose the
                    // stats for channels in the other chunks.
                    warn!(error = %e, chunk_size = chunk.len(), "batch chunk failed, skipping");
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn provider(base_url: &str) -> YouTubeProvider {
        YouTubeProvider::new(
            YouTubeClient::new("test-api-key".into(), Some(base_url.to_string())).unwrap(),
        )
    }

    fn item(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "snippet": {"title": format!("Channel {id}"), "thumbnails": {"default": {"url": "u"}}},
            "statistics": {"subscriberCount": "1", "videoCount": "2", "viewCount": "3"}
        })
    }

    fn ids_in_request(request: &Request) -> usize {
        request
            .url
            .query_pairs()
            .find(|(k, _)| k == "id")
            .map(|(_, v)| v.split(',').count())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn resolve_username_returns_first_hit() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "items": [{"id": {"kind": "youtube#channel", "channelId": "UCfound"}}]
        });
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "somehandle"))
            .and(query_param("type", "channel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let id = provider(&server.uri())
            .resolve_username("somehandle")
            .await
            .unwrap();
        assert_eq!(id, "UCfound");
    }

    #[tokio::test]
    async fn resolve_username_maps_empty_results_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
            .mount(&server)
            .await;

        let err = provider(&server.uri())
            .resolve_username("nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, TubetrackError::NotFound(_)));
    }

    #[tokio::test]
    async fn fetch_one_maps_empty_items_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).fetch_one("UCmissing").await.unwrap_err();
        assert!(matches!(err, TubetrackError::NotFound(_)));
    }

    #[tokio::test]
    async fn fetch_batch_chunks_120_ids_into_50_50_20() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": [item("UCx")]})),
            )
            .expect(3)
            .mount(&server)
            .await;

        let ids: Vec<String> = (0..120).map(|i| format!("UC{i:03}")).collect();
        let stats = provider(&server.uri()).fetch_batch(&ids).await.unwrap();
        assert_eq!(stats.len(), 3);

        let requests = server.received_requests().await.unwrap();
        let sizes: Vec<usize> = requests.iter().map(ids_in_request).collect();
        assert_eq!(sizes, vec![50, 50, 20]);
    }

    #[tokio::test]
    async fn failing_middle_chunk_does_not_abort_the_rest() {
        let server = MockServer::start().await;

        // Mounted in order: the first request succeeds, the second gets a
        // non-transient 403 (no retry), and the remaining requests succeed.
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": [item("UCa")]})),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(403).set_body_json(
                serde_json::json!({"error": {"code": 403, "message": "quotaExceeded"}}),
            ))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": [item("UCc")]})),
            )
            .mount(&server)
            .await;

        let ids: Vec<String> = (0..120).map(|i| format!("UC{i:03}")).collect();
        let stats = provider(&server.uri()).fetch_batch(&ids).await.unwrap();

        // Chunks 1 and 3 each contributed their item; chunk 2 was skipped.
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].channel_id, "UCa");
        assert_eq!(stats[1].channel_id, "UCc");
    }
}
