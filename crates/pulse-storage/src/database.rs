// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Query modules accept `&Database` and call through
//! `connection().call()`; no additional connections are created for writes.

use std::path::Path;

use pulse_config::model::StorageConfig;
use pulse_core::PulseError;
use tracing::debug;

/// Handle to the single-writer SQLite connection.
///
/// Cheap to clone; all clones share one background connection thread.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at the configured path.
    ///
    /// Runs embedded migrations on a short-lived synchronous connection
    /// before the long-lived writer opens, then applies session PRAGMAs.
    pub async fn open(config: &StorageConfig) -> Result<Self, PulseError> {
        let path = config.database_path.clone();

        if let Some(parent) = Path::new(&path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PulseError::Storage {
                source: Box::new(e),
            })?;
        }

        let wal_mode = config.wal_mode;
        let migrate_path = path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), PulseError> {
            let mut conn =
                rusqlite::Connection::open(&migrate_path).map_err(|e| PulseError::Storage {
                    source: Box::new(e),
                })?;
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")
                    .map_err(|e| PulseError::Storage {
                        source: Box::new(e),
                    })?;
            }
            crate::migrations::run_migrations(&mut conn)
        })
        .await
        .map_err(|e| PulseError::Internal(format!("migration task failed: {e}")))??;

        let conn = tokio_rusqlite::Connection::open(&path)
            .await
            .map_err(|e| PulseError::Storage {
                source: Box::new(e),
            })?;

        conn.call(|conn| {
            conn.execute_batch(
                "PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;
                 PRAGMA synchronous = NORMAL;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path = %path, wal = wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying single-writer connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Liveness probe: verifies the connection answers a trivial query.
    pub async fn ping(&self) -> Result<(), PulseError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), PulseError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the workspace error type.
pub(crate) fn map_tr_err(err: tokio_rusqlite::Error<rusqlite::Error>) -> PulseError {
    PulseError::Storage {
        source: Box::new(err),
    }
}

/// Current UTC time as an ISO 8601 string with millisecond precision.
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn open_creates_database_file_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");
        let db = Database::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();

        assert!(db_path.exists(), "database file should be created");

        // The migration must have created all three tables.
        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
                let mut tables = Vec::new();
                for row in rows {
                    tables.push(row?);
                }
                Ok(tables)
            })
            .await
            .unwrap();
        for expected in ["alerts", "customers", "feedback"] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let config = make_config(db_path.to_str().unwrap());

        let db = Database::open(&config).await.unwrap();
        db.close().await.unwrap();

        // Second open re-runs the migration runner against an up-to-date
        // schema and must succeed.
        let db = Database::open(&config).await.unwrap();
        db.ping().await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested/dirs/pulse.db");
        let db = Database::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }

    #[test]
    fn timestamps_are_iso8601_millis_utc() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'), "got: {ts}");
        // e.g. 2026-08-05T12:00:00.000Z
        assert_eq!(ts.len(), 24, "got: {ts}");
    }
}
