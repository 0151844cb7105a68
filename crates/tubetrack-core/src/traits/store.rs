// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage traits for durable channel records and daily snapshots.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::TubetrackError;
use crate::types::{ChannelRecord, MetadataPatch, StatsSnapshot};

/// Durable store for user-curated channel records.
#[async_trait]
pub trait ChannelStore: Send + Sync {
    /// Insert or replace a channel record, keyed by channel id.
    async fn upsert_channel(&self, record: &ChannelRecord) -> Result<(), TubetrackError>;

    /// Point lookup by channel id.
    async fn get_channel(&self, channel_id: &str)
        -> Result<Option<ChannelRecord>, TubetrackError>;

    /// All tracked channels, newest first.
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, TubetrackError>;

    /// Apply a partial metadata patch with merge-create semantics: fields
    /// absent from the patch are untouched, and a missing record is created
    /// rather than reported as an error.
    async fn apply_metadata_patch(
        &self,
        channel_id: &str,
        patch: &MetadataPatch,
    ) -> Result<(), TubetrackError>;

    /// Delete a channel record. Deleting an absent id is a silent no-op.
    async fn delete_channel(&self, channel_id: &str) -> Result<(), TubetrackError>;
}

/// Durable store for per-channel-per-day counter snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Idempotent write keyed by `(channel_id, day)`: re-capturing the same
    /// day overwrites the counters rather than duplicating the row.
    async fn upsert_snapshot(&self, snapshot: &StatsSnapshot) -> Result<(), TubetrackError>;

    /// Point lookup by channel and day.
    async fn get_snapshot(
        &self,
        channel_id: &str,
        day: NaiveDate,
    ) -> Result<Option<StatsSnapshot>, TubetrackError>;

    /// All snapshots captured on the given day.
    async fn list_by_day(&self, day: NaiveDate) -> Result<Vec<StatsSnapshot>, TubetrackError>;
}
