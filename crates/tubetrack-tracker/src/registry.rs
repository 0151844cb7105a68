// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel registry: the orchestration layer behind the HTTP surface.
//!
//! Merges cached provider stats with always-fresh user metadata, captures
//! daily snapshots as a side effect of refreshes, and owns the add / patch /
//! remove lifecycle of tracked channels.

use std::sync::Arc;

use chrono::SecondsFormat;
use tracing::{info, warn};

use tubetrack_core::clock::Clock;
use tubetrack_core::extract::extract_channel_ref;
use tubetrack_core::traits::{ChannelStore, SnapshotStore, StatsProvider};
use tubetrack_core::types::{
    ChannelRecord, ChannelRef, ChannelStats, ComposedChannel, MetadataPatch, StatsSnapshot,
};
use tubetrack_core::TubetrackError;

use crate::cache::DailyCache;

pub struct ChannelRegistry {
    channels: Arc<dyn ChannelStore>,
    snapshots: Arc<dyn SnapshotStore>,
    provider: Arc<dyn StatsProvider>,
    clock: Arc<dyn Clock>,
    cache: DailyCache,
}

impl ChannelRegistry {
    pub fn new(
        channels: Arc<dyn ChannelStore>,
        snapshots: Arc<dyn SnapshotStore>,
        provider: Arc<dyn StatsProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            channels,
            snapshots,
            provider,
            clock,
            cache: DailyCache::new(),
        }
    }

    /// All tracked channels with current stats and fresh metadata.
    ///
    /// Stats come from the daily cache when it holds today's entry; a miss
    /// (or `force_refresh`) goes to the provider and captures a snapshot per
    /// returned channel. A channel the provider omitted from the batch is
    /// left out of the response rather than padded with stale numbers.
    pub async fn list_channels(
        &self,
        force_refresh: bool,
    ) -> Result<Vec<ComposedChannel>, TubetrackError> {
        let records = self.channels.list_channels().await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let today = self.clock.today();
        let stats = if force_refresh {
            None
        } else {
            self.cache.get(today).await
        };
        let stats = match stats {
            Some(cached) => cached,
            None => {
                let ids: Vec<String> = records.iter().map(|r| r.channel_id.clone()).collect();
                let fetched = self.provider.fetch_batch(&ids).await?;
                self.capture_snapshots(&fetched).await;
                self.cache.put(today, fetched.clone()).await;
                fetched
            }
        };

        // Metadata always comes from the store, so note edits are visible
        // even on a cache hit. Records drive the iteration order.
        let mut composed = Vec::with_capacity(records.len());
        for record in &records {
            if let Some(stat) = stats.iter().find(|s| s.channel_id == record.channel_id) {
                composed.push(ComposedChannel::compose(stat, record));
            }
        }
        Ok(composed)
    }

    /// Start tracking the channel behind `url`.
    ///
    /// The URL is reduced to a channel reference, username-like references
    /// are resolved to a canonical id, and an already-tracked id is rejected
    /// with `DuplicateChannel`.
    pub async fn add_channel(&self, url: &str) -> Result<ComposedChannel, TubetrackError> {
        let channel_ref = extract_channel_ref(url)?;
        let channel_id = match &channel_ref {
            ChannelRef::ChannelId(id) => id.clone(),
            ChannelRef::Username(name) => self.provider.resolve_username(name).await?,
        };

        if self.channels.get_channel(&channel_id).await?.is_some() {
            return Err(TubetrackError::DuplicateChannel(channel_id));
        }

        let stats = self.provider.fetch_one(&channel_id).await?;
        let record = ChannelRecord {
            channel_id: channel_id.clone(),
            source_url: url.to_string(),
            title: stats.title.clone(),
            note: String::new(),
            description: String::new(),
            detail_description: String::new(),
            created_at: self.now_iso(),
        };
        self.channels.upsert_channel(&record).await?;
        self.capture_snapshots(std::slice::from_ref(&stats)).await;

        // The cached batch predates this channel; drop it so the next list
        // includes the newcomer.
        self.cache.invalidate().await;

        info!(channel_id, "channel added");
        Ok(ComposedChannel::compose(&stats, &record))
    }

    /// Apply a partial metadata patch, creating the record if missing.
    pub async fn update_metadata(
        &self,
        channel_id: &str,
        patch: &MetadataPatch,
    ) -> Result<ChannelRecord, TubetrackError> {
        self.channels.apply_metadata_patch(channel_id, patch).await?;
        self.channels
            .get_channel(channel_id)
            .await?
            .ok_or_else(|| TubetrackError::NotFound(channel_id.to_string()))
    }

    /// Stop tracking a channel. Removing an untracked id succeeds quietly.
    pub async fn remove_channel(&self, channel_id: &str) -> Result<(), TubetrackError> {
        self.channels.delete_channel(channel_id).await?;
        info!(channel_id, "channel removed");
        Ok(())
    }

    /// Persist one snapshot per fetched channel for today. Snapshot capture
    /// is best effort: a failed write is logged and does not fail the
    /// request that triggered the refresh.
    async fn capture_snapshots(&self, stats: &[ChannelStats]) {
        let day = self.clock.today();
        let captured_at = self.now_iso();
        for stat in stats {
            let snapshot = StatsSnapshot {
                channel_id: stat.channel_id.clone(),
                day,
                video_count: stat.video_count,
                view_count: stat.view_count,
                subscriber_count: Some(stat.subscriber_count),
                captured_at: captured_at.clone(),
            };
            if let Err(e) = self.snapshots.upsert_snapshot(&snapshot).await {
                warn!(channel_id = %stat.channel_id, error = %e, "snapshot capture failed");
            }
        }
    }

    fn now_iso(&self) -> String {
        self.clock
            .now_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
