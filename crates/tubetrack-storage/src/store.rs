// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed implementation of the channel and snapshot store traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use tubetrack_core::traits::{ChannelStore, SnapshotStore};
use tubetrack_core::types::{ChannelRecord, MetadataPatch, StatsSnapshot};
use tubetrack_core::TubetrackError;

use crate::database::Database;
use crate::queries;

/// Store facade over a single [`Database`] connection.
///
/// Implements both [`ChannelStore`] and [`SnapshotStore`]; the two tables
/// share one database file so a single handle serves both traits.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open (creating if needed) the store at `database_path`.
    pub async fn open(database_path: &str, wal_mode: bool) -> Result<Self, TubetrackError> {
        let db = Database::open_with(database_path, wal_mode).await?;
        Ok(Self { db })
    }

    /// Flush pending writes and checkpoint the WAL.
    pub async fn close(&self) -> Result<(), TubetrackError> {
        self.db.close().await
    }
}

#[async_trait]
impl ChannelStore for SqliteStore {
    async fn upsert_channel(&self, record: &ChannelRecord) -> Result<(), TubetrackError> {
        queries::channels::upsert_channel(&self.db, record).await
    }

    async fn get_channel(
        &self,
        channel_id: &str,
    ) -> Result<Option<ChannelRecord>, TubetrackError> {
        queries::channels::get_channel(&self.db, channel_id).await
    }

    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, TubetrackError> {
        queries::channels::list_channels(&self.db).await
    }

    async fn apply_metadata_patch(
        &self,
        channel_id: &str,
        patch: &MetadataPatch,
    ) -> Result<(), TubetrackError> {
        queries::channels::apply_metadata_patch(&self.db, channel_id, patch).await
    }

    async fn delete_channel(&self, channel_id: &str) -> Result<(), TubetrackError> {
        queries::channels::delete_channel(&self.db, channel_id).await
    }
}

#[async_trait]
impl SnapshotStore for SqliteStore {
    async fn upsert_snapshot(&self, snapshot: &StatsSnapshot) -> Result<(), TubetrackError> {
        queries::snapshots::upsert_snapshot(&self.db, snapshot).await
    }

    async fn get_snapshot(
        &self,
        channel_id: &str,
        day: NaiveDate,
    ) -> Result<Option<StatsSnapshot>, TubetrackError> {
        queries::snapshots::get_snapshot(&self.db, channel_id, day).await
    }

    async fn list_by_day(&self, day: NaiveDate) -> Result<Vec<StatsSnapshot>, TubetrackError> {
        queries::snapshots::list_by_day(&self.db, day).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn store_serves_both_traits_through_one_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.db");
        let store = SqliteStore::open(path.to_str().unwrap(), true).await.unwrap();

        let record = ChannelRecord {
            channel_id: "UC1".into(),
            source_url: "https://youtube.com/@one".into(),
            title: "One".into(),
            note: String::new(),
            description: String::new(),
            detail_description: String::new(),
            created_at: "2026-08-30T00:00:00.000Z".into(),
        };
        store.upsert_channel(&record).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let snapshot = StatsSnapshot {
            channel_id: "UC1".into(),
            day,
            video_count: 7,
            view_count: 700,
            subscriber_count: Some(70),
            captured_at: "2026-08-30T05:00:00.000Z".into(),
        };
        store.upsert_snapshot(&snapshot).await.unwrap();

        assert_eq!(store.list_channels().await.unwrap().len(), 1);
        assert_eq!(store.list_by_day(day).await.unwrap().len(), 1);
        assert_eq!(
            store
                .get_snapshot("UC1", day)
                .await
                .unwrap()
                .unwrap()
                .video_count,
            7
        );

        store.close().await.unwrap();
    }
}
