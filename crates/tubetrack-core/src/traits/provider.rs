// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stats provider trait for external channel-statistics APIs.

use async_trait::async_trait;

use crate::error::TubetrackError;
use crate::types::ChannelStats;

/// Adapter over the external channel-stats API.
///
/// Implementations own transport concerns (batching, timeouts, transient
/// retry); callers see a flat fetch interface.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Resolve a username-like reference (handle, custom name, legacy user
    /// name) to the provider's canonical channel id.
    ///
    /// Returns `NotFound` when the search yields zero results.
    async fn resolve_username(&self, value: &str) -> Result<String, TubetrackError>;

    /// Fetch snippet and statistics for a single channel id.
    async fn fetch_one(&self, channel_id: &str) -> Result<ChannelStats, TubetrackError>;

    /// Fetch stats for many channel ids, chunking requests as needed.
    ///
    /// A failing chunk is logged and skipped rather than aborting the rest,
    /// so the result may contain fewer entries than ids were asked for.
    async fn fetch_batch(&self, channel_ids: &[String])
        -> Result<Vec<ChannelStats>, TubetrackError>;
}
