// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use std::path::Path;

use tracing::debug;

use tubetrack_core::TubetrackError;

/// Handle to the SQLite database behind a single async connection.
///
/// Opening runs the PRAGMA setup and all pending refinery migrations, so a
/// constructed `Database` always has the current schema.
pub struct Database {
    connection: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` with WAL enabled.
    pub async fn open(path: &str) -> Result<Self, TubetrackError> {
        Self::open_with(path, true).await
    }

    /// Open with an explicit WAL choice; disabling WAL is for tests and
    /// read-only inspection only.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, TubetrackError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TubetrackError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let connection = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| TubetrackError::Storage {
                source: Box::new(e),
            })?;

        connection
            .call(move |conn| {
                if wal_mode {
                    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
                }
                conn.execute_batch(
                    "PRAGMA synchronous = NORMAL;
                     PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )
            })
            .await
            .map_err(map_tr_err)?;

        connection
            .call(|conn| crate::migrations::run_migrations(conn))
            .await
            .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened and migrated");
        Ok(Self { connection })
    }

    /// The underlying async connection, for query modules.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.connection
    }

    /// Checkpoint the WAL and flush pending writes before shutdown.
    pub async fn close(&self) -> Result<(), TubetrackError> {
        self.connection
            .call(|conn| conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);"))
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub fn map_tr_err<E>(e: tokio_rusqlite::Error<E>) -> TubetrackError
where
    E: std::error::Error + Send + Sync + 'static,
{
    TubetrackError::Storage {
        source: Box::new(e),
    }
}
