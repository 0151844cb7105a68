// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel record CRUD operations.

use rusqlite::params;

use tubetrack_core::types::{ChannelRecord, MetadataPatch};
use tubetrack_core::TubetrackError;

use crate::database::{map_tr_err, Database};

fn row_to_record(row: &rusqlite::Row<'_>) -> Result<ChannelRecord, rusqlite::Error> {
    Ok(ChannelRecord {
        channel_id: row.get(0)?,
        source_url: row.get(1)?,
        title: row.get(2)?,
        note: row.get(3)?,
        description: row.get(4)?,
        detail_description: row.get(5)?,
        created_at: row.get(6)?,
    })
}

const RECORD_COLUMNS: &str =
    "channel_id, source_url, title, note, description, detail_description, created_at";

/// Insert a channel record, or refresh its provider-derived fields if it
/// already exists. User metadata and created_at survive a re-insert.
pub async fn upsert_channel(db: &Database, record: &ChannelRecord) -> Result<(), TubetrackError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO channels (channel_id, source_url, title, note, description, detail_description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(channel_id) DO UPDATE SET
                     source_url = excluded.source_url,
                     title = excluded.title",
                params![
                    record.channel_id,
                    record.source_url,
                    record.title,
                    record.note,
                    record.description,
                    record.detail_description,
                    record.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a channel record by id.
pub async fn get_channel(
    db: &Database,
    channel_id: &str,
) -> Result<Option<ChannelRecord>, TubetrackError> {
    let channel_id = channel_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM channels WHERE channel_id = ?1"
            ))?;
            let result = stmt.query_row(params![channel_id], row_to_record);
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List all tracked channels, newest first.
pub async fn list_channels(db: &Database) -> Result<Vec<ChannelRecord>, TubetrackError> {
    db.connection()
        .call(|conn| -> Result<Vec<ChannelRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM channels ORDER BY created_at DESC, channel_id"
            ))?;
            let rows = stmt.query_map([], row_to_record)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial metadata patch with merge-create semantics.
///
/// A missing record is created first (empty fields, database clock for
/// created_at); COALESCE leaves absent patch fields untouched while a
/// present-but-empty field overwrites to the empty string.
pub async fn apply_metadata_patch(
    db: &Database,
    channel_id: &str,
    patch: &MetadataPatch,
) -> Result<(), TubetrackError> {
    let channel_id = channel_id.to_string();
    let patch = patch.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO channels (channel_id, created_at)
                 VALUES (?1, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(channel_id) DO NOTHING",
                params![channel_id],
            )?;
            conn.execute(
                "UPDATE channels SET
                     note = COALESCE(?2, note),
                     description = COALESCE(?3, description),
                     detail_description = COALESCE(?4, detail_description)
                 WHERE channel_id = ?1",
                params![
                    channel_id,
                    patch.note,
                    patch.description,
                    patch.detail_description
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a channel record. Deleting an absent id is a silent no-op.
pub async fn delete_channel(db: &Database, channel_id: &str) -> Result<(), TubetrackError> {
    let channel_id = channel_id.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute("DELETE FROM channels WHERE channel_id = ?1", params![channel_id])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("channels.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_record(id: &str) -> ChannelRecord {
        ChannelRecord {
            channel_id: id.to_string(),
            source_url: format!("https://youtube.com/channel/{id}"),
            title: format!("Channel {id}"),
            note: String::new(),
            description: String::new(),
            detail_description: String::new(),
            created_at: "2026-08-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_and_get_roundtrips() {
        let (db, _dir) = setup_db().await;
        upsert_channel(&db, &make_record("UC1")).await.unwrap();

        let record = get_channel(&db, "UC1").await.unwrap().unwrap();
        assert_eq!(record.channel_id, "UC1");
        assert_eq!(record.title, "Channel UC1");

        assert!(get_channel(&db, "UC-absent").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn upsert_preserves_metadata_on_conflict() {
        let (db, _dir) = setup_db().await;
        upsert_channel(&db, &make_record("UC1")).await.unwrap();
        apply_metadata_patch(
            &db,
            "UC1",
            &MetadataPatch {
                note: Some("keep me".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // Re-adding the channel refreshes the title but not the note.
        let mut again = make_record("UC1");
        again.title = "Renamed".into();
        upsert_channel(&db, &again).await.unwrap();

        let record = get_channel(&db, "UC1").await.unwrap().unwrap();
        assert_eq!(record.title, "Renamed");
        assert_eq!(record.note, "keep me");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let (db, _dir) = setup_db().await;
        let mut older = make_record("UCold");
        older.created_at = "2026-01-01T00:00:00.000Z".into();
        let mut newer = make_record("UCnew");
        newer.created_at = "2026-08-01T00:00:00.000Z".into();
        upsert_channel(&db, &older).await.unwrap();
        upsert_channel(&db, &newer).await.unwrap();

        let all = list_channels(&db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].channel_id, "UCnew");
        assert_eq!(all[1].channel_id, "UCold");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn patch_applies_only_present_fields() {
        let (db, _dir) = setup_db().await;
        upsert_channel(&db, &make_record("UC1")).await.unwrap();

        apply_metadata_patch(
            &db,
            "UC1",
            &MetadataPatch {
                note: Some("x".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let record = get_channel(&db, "UC1").await.unwrap().unwrap();
        assert_eq!(record.note, "x");
        assert_eq!(record.description, "");

        apply_metadata_patch(
            &db,
            "UC1",
            &MetadataPatch {
                description: Some("described".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let record = get_channel(&db, "UC1").await.unwrap().unwrap();
        assert_eq!(record.note, "x");
        assert_eq!(record.description, "described");

        // Present-but-empty clears; absent leaves untouched.
        apply_metadata_patch(
            &db,
            "UC1",
            &MetadataPatch {
                description: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let record = get_channel(&db, "UC1").await.unwrap().unwrap();
        assert_eq!(record.note, "x");
        assert_eq!(record.description, "");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn patch_creates_missing_record() {
        let (db, _dir) = setup_db().await;
        apply_metadata_patch(
            &db,
            "UCghost",
            &MetadataPatch {
                note: Some("created by patch".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let record = get_channel(&db, "UCghost").await.unwrap().unwrap();
        assert_eq!(record.note, "created by patch");
        assert_eq!(record.source_url, "");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (db, _dir) = setup_db().await;
        upsert_channel(&db, &make_record("UC1")).await.unwrap();

        delete_channel(&db, "UC1").await.unwrap();
        assert!(get_channel(&db, "UC1").await.unwrap().is_none());

        // Deleting again (or a never-existing id) is not an error.
        delete_channel(&db, "UC1").await.unwrap();
        delete_channel(&db, "UC-never").await.unwrap();
        db.close().await.unwrap();
    }
}
