// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily stat snapshot persistence.

use chrono::NaiveDate;
use rusqlite::params;

use tubetrack_core::types::{snapshot_key, StatsSnapshot};
use tubetrack_core::TubetrackError;

use crate::database::{map_tr_err, Database};

const DAY_FORMAT: &str = "%Y-%m-%d";

fn row_to_snapshot(row: &rusqlite::Row<'_>) -> Result<StatsSnapshot, rusqlite::Error> {
    let day_text: String = row.get(1)?;
    let day = NaiveDate::parse_from_str(&day_text, DAY_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let video_count: i64 = row.get(2)?;
    let view_count: i64 = row.get(3)?;
    let subscriber_count: Option<i64> = row.get(4)?;
    Ok(StatsSnapshot {
        channel_id: row.get(0)?,
        day,
        video_count: video_count as u64,
        view_count: view_count as u64,
        subscriber_count: subscriber_count.map(|v| v as u64),
        captured_at: row.get(5)?,
    })
}

const SNAPSHOT_COLUMNS: &str =
    "channel_id, day, video_count, view_count, subscriber_count, captured_at";

/// Write a snapshot, replacing any existing row for the same channel/day.
/// Re-capturing the same day is how counters get refreshed, so this is the
/// normal path and not an error.
pub async fn upsert_snapshot(db: &Database, snapshot: &StatsSnapshot) -> Result<(), TubetrackError> {
    let snapshot = snapshot.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO daily_stats (snapshot_key, channel_id, day, video_count, view_count, subscriber_count, captured_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(snapshot_key) DO UPDATE SET
                     video_count = excluded.video_count,
                     view_count = excluded.view_count,
                     subscriber_count = excluded.subscriber_count,
                     captured_at = excluded.captured_at",
                params![
                    snapshot.key(),
                    snapshot.channel_id,
                    snapshot.day.format(DAY_FORMAT).to_string(),
                    snapshot.video_count as i64,
                    snapshot.view_count as i64,
                    snapshot.subscriber_count.map(|v| v as i64),
                    snapshot.captured_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch the snapshot for one channel on one day, if captured.
pub async fn get_snapshot(
    db: &Database,
    channel_id: &str,
    day: NaiveDate,
) -> Result<Option<StatsSnapshot>, TubetrackError> {
    let key = snapshot_key(channel_id, day);
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SNAPSHOT_COLUMNS} FROM daily_stats WHERE snapshot_key = ?1"
            ))?;
            match stmt.query_row(params![key], row_to_snapshot) {
                Ok(snapshot) => Ok(Some(snapshot)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// All snapshots captured on the given day, across channels.
pub async fn list_by_day(db: &Database, day: NaiveDate) -> Result<Vec<StatsSnapshot>, TubetrackError> {
    let day_text = day.format(DAY_FORMAT).to_string();
    db.connection()
        .call(move |conn| -> Result<Vec<StatsSnapshot>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SNAPSHOT_COLUMNS} FROM daily_stats WHERE day = ?1 ORDER BY channel_id"
            ))?;
            let rows = stmt.query_map(params![day_text], row_to_snapshot)?;
            let mut snapshots = Vec::new();
            for row in rows {
                snapshots.push(row?);
            }
            Ok(snapshots)
        })
        .await
        .map_err(map_tr_err)
}
