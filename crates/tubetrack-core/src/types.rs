// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the tubetrack workspace.
//!
//! Serialized field names follow the JSON contract of the HTTP surface
//! (camelCase), which is why the serde rename attributes appear here rather
//! than in the gateway crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A typed channel reference extracted from a URL.
///
/// `Username` covers handles (`@name`), legacy custom names (`c/name`) and
/// legacy user pages (`user/name`) -- all of which need a search-style
/// resolution against the provider. `ChannelId` is the provider-assigned
/// canonical id and can be looked up directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    Username(String),
    ChannelId(String),
}

impl ChannelRef {
    /// The raw identifier token, independent of kind.
    pub fn value(&self) -> &str {
        match self {
            ChannelRef::Username(v) | ChannelRef::ChannelId(v) => v,
        }
    }
}

/// Provider-derived statistics for one channel, as returned by a fetch.
///
/// This is the volatile half of a composed channel: it is what the daily
/// cache holds and what gets snapshotted, and it never carries user-edited
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel_id: String,
    pub title: String,
    pub thumbnail: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
}

/// Durable per-channel record owned by the channel registry.
///
/// Holds user-curated metadata only; volatile counters live in
/// [`StatsSnapshot`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub channel_id: String,
    pub source_url: String,
    pub title: String,
    pub note: String,
    pub description: String,
    pub detail_description: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// One channel's counters as observed on one calendar day.
///
/// Keyed by `(channel_id, day)`; the durable identity is the snapshot key
/// `{channel_id}_{YYYY-MM-DD}` (see [`StatsSnapshot::key`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub channel_id: String,
    pub day: NaiveDate,
    pub video_count: u64,
    pub view_count: u64,
    pub subscriber_count: Option<u64>,
    /// ISO 8601 capture timestamp.
    pub captured_at: String,
}

impl StatsSnapshot {
    /// The durable record identity: `{channel_id}_{YYYY-MM-DD}`.
    pub fn key(&self) -> String {
        snapshot_key(&self.channel_id, self.day)
    }
}

/// Format the durable snapshot identity for a channel/day pair.
pub fn snapshot_key(channel_id: &str, day: NaiveDate) -> String {
    format!("{channel_id}_{}", day.format("%Y-%m-%d"))
}

/// Aggregate new-video/new-view counts for one day. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(rename = "newVideosToday")]
    pub new_videos: u64,
    #[serde(rename = "newViewsToday")]
    pub new_views: u64,
}

impl DailySummary {
    /// The zero summary for a day with no snapshots.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            new_videos: 0,
            new_views: 0,
        }
    }
}

/// Partial metadata update. Absent fields are left untouched; present but
/// empty fields clear the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detail_description: Option<String>,
}

impl MetadataPatch {
    /// True when no field is present, i.e. the patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.description.is_none() && self.detail_description.is_none()
    }
}

/// Provider-derived stats merged with durable user metadata, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedChannel {
    /// Duplicate of `channel_id` kept for frontend compatibility.
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub thumbnail: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
    pub url: String,
    pub note: String,
    pub description: String,
    pub detail_description: String,
    pub created_at: String,
}

impl ComposedChannel {
    /// Merge provider stats with a channel record's metadata.
    pub fn compose(stats: &ChannelStats, record: &ChannelRecord) -> Self {
        Self {
            id: stats.channel_id.clone(),
            channel_id: stats.channel_id.clone(),
            title: stats.title.clone(),
            thumbnail: stats.thumbnail.clone(),
            subscriber_count: stats.subscriber_count,
            video_count: stats.video_count,
            view_count: stats.view_count,
            url: record.source_url.clone(),
            note: record.note.clone(),
            description: record.description.clone(),
            detail_description: record.detail_description.clone(),
            created_at: record.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ChannelStats {
        ChannelStats {
            channel_id: "UCabc".into(),
            title: "Some Channel".into(),
            thumbnail: "https://example.com/t.jpg".into(),
            subscriber_count: 1000,
            video_count: 42,
            view_count: 123456,
        }
    }

    fn record() -> ChannelRecord {
        ChannelRecord {
            channel_id: "UCabc".into(),
            source_url: "https://youtube.com/@some".into(),
            title: "Some Channel".into(),
            note: "watch weekly".into(),
            description: "desc".into(),
            detail_description: "long desc".into(),
            created_at: "2026-08-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn snapshot_key_format() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(snapshot_key("UCabc", day), "UCabc_2026-08-30");
    }

    #[test]
    fn compose_merges_stats_and_metadata() {
        let composed = ComposedChannel::compose(&stats(), &record());
        assert_eq!(composed.id, "UCabc");
        assert_eq!(composed.video_count, 42);
        assert_eq!(composed.note, "watch weekly");
        assert_eq!(composed.url, "https://youtube.com/@some");
    }

    #[test]
    fn composed_channel_serializes_camel_case() {
        let json = serde_json::to_string(&ComposedChannel::compose(&stats(), &record())).unwrap();
        assert!(json.contains("\"channelId\":\"UCabc\""));
        assert!(json.contains("\"subscriberCount\":1000"));
        assert!(json.contains("\"detailDescription\":\"long desc\""));
    }

    #[test]
    fn metadata_patch_deserializes_partial_body() {
        let patch: MetadataPatch = serde_json::from_str(r#"{"note": "x"}"#).unwrap();
        assert_eq!(patch.note.as_deref(), Some("x"));
        assert!(patch.description.is_none());
        assert!(!patch.is_empty());

        let empty: MetadataPatch = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn daily_summary_serializes_frontend_field_names() {
        let summary = DailySummary {
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            new_videos: 3,
            new_views: 500,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"newVideosToday\":3"));
        assert!(json.contains("\"newViewsToday\":500"));
        assert!(json.contains("\"date\":\"2026-08-30\""));
    }
}
