// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serde models for the YouTube Data API v3 responses.
//!
//! Only the fields the tracker consumes are modeled; everything else in the
//! payload is ignored. Statistics counters arrive as decimal strings and may
//! be absent entirely (hidden subscriber counts), so each one deserializes
//! into an `Option<String>` and is parsed with a zero default.

use serde::Deserialize;

use tubetrack_core::types::ChannelStats;

/// Response of `GET /channels?part=snippet,statistics`.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

/// One channel resource.
#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub video_count: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
}

impl ChannelItem {
    /// Flatten the API resource into the domain stats type.
    pub fn into_stats(self) -> ChannelStats {
        ChannelStats {
            channel_id: self.id,
            title: self.snippet.title,
            thumbnail: self
                .snippet
                .thumbnails
                .default
                .map(|t| t.url)
                .unwrap_or_default(),
            subscriber_count: parse_count(self.statistics.subscriber_count.as_deref()),
            video_count: parse_count(self.statistics.video_count.as_deref()),
            view_count: parse_count(self.statistics.view_count.as_deref()),
        }
    }
}

/// Parse a string-encoded counter, defaulting absent or malformed values to
/// zero rather than failing the whole response.
fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Response of `GET /search?type=channel`.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// Error envelope the API returns on failures.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_item_flattens_to_stats() {
        let json = serde_json::json!({
            "id": "UCabc",
            "snippet": {
                "title": "A Channel",
                "description": "about",
                "thumbnails": {"default": {"url": "https://i.ytimg.com/t.jpg"}}
            },
            "statistics": {
                "subscriberCount": "12345",
                "videoCount": "67",
                "viewCount": "890123"
            }
        });
        let item: ChannelItem = serde_json::from_value(json).unwrap();
        let stats = item.into_stats();
        assert_eq!(stats.channel_id, "UCabc");
        assert_eq!(stats.subscriber_count, 12345);
        assert_eq!(stats.video_count, 67);
        assert_eq!(stats.view_count, 890123);
        assert_eq!(stats.thumbnail, "https://i.ytimg.com/t.jpg");
    }

    #[test]
    fn missing_statistics_default_to_zero() {
        let json = serde_json::json!({
            "id": "UChidden",
            "snippet": {"title": "Hidden"},
            "statistics": {"videoCount": "3"}
        });
        let item: ChannelItem = serde_json::from_value(json).unwrap();
        let stats = item.into_stats();
        assert_eq!(stats.subscriber_count, 0);
        assert_eq!(stats.video_count, 3);
        assert_eq!(stats.view_count, 0);
        assert_eq!(stats.thumbnail, "");
    }

    #[test]
    fn search_response_carries_channel_id() {
        let json = serde_json::json!({
            "items": [{"id": {"kind": "youtube#channel", "channelId": "UCfound"}}]
        });
        let resp: SearchListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.items[0].id.channel_id.as_deref(), Some("UCfound"));
    }

    #[test]
    fn empty_items_deserializes() {
        let resp: ChannelListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }
}
