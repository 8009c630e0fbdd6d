// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer resolution operations.

use pulse_core::PulseError;
use rusqlite::params;

use crate::database::{now_iso8601, Database};
use crate::models::Customer;

/// Resolve an external customer id to its canonical row, creating one on
/// first sight.
///
/// The insert uses `ON CONFLICT(external_id) DO NOTHING` followed by a
/// select, inside a single closure on the writer thread, so repeated or
/// concurrent resolution of the same external id always converges on one
/// row. At most one insert happens per unseen external id.
pub async fn get_or_create(db: &Database, external_id: &str) -> Result<Customer, PulseError> {
    let external_id = external_id.to_string();
    let candidate_id = uuid::Uuid::new_v4().to_string();
    let created_at = now_iso8601();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO customers (id, external_id, created_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(external_id) DO NOTHING",
                params![candidate_id, external_id, created_at],
            )?;
            let mut stmt = conn.prepare(
                "SELECT id, external_id, created_at FROM customers WHERE external_id = ?1",
            )?;
            let customer = stmt.query_row(params![external_id], |row| {
                Ok(Customer {
                    id: row.get(0)?,
                    external_id: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?;
            Ok(customer)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up a customer by external id.
pub async fn get_by_external_id(
    db: &Database,
    external_id: &str,
) -> Result<Option<Customer>, PulseError> {
    let external_id = external_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, external_id, created_at FROM customers WHERE external_id = ?1",
            )?;
            let result = stmt.query_row(params![external_id], |row| {
                Ok(Customer {
                    id: row.get(0)?,
                    external_id: row.get(1)?,
                    created_at: row.get(2)?,
                })
            });
            match result {
                Ok(customer) => Ok(Some(customer)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_config::model::StorageConfig;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let config = StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: true,
        };
        let db = Database::open(&config).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn first_sight_creates_customer() {
        let (db, _dir) = setup_db().await;

        let customer = get_or_create(&db, "cust_123").await.unwrap();
        assert_eq!(customer.external_id, "cust_123");
        assert!(!customer.id.is_empty());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn repeated_resolution_returns_same_row() {
        let (db, _dir) = setup_db().await;

        let first = get_or_create(&db, "cust_123").await.unwrap();
        let second = get_or_create(&db, "cust_123").await.unwrap();
        assert_eq!(first.id, second.id);

        // Exactly one row exists for the external id.
        let count: i64 = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row(
                    "SELECT COUNT(*) FROM customers WHERE external_id = 'cust_123'",
                    [],
                    |row| row.get(0),
                )
            })
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn distinct_external_ids_get_distinct_rows() {
        let (db, _dir) = setup_db().await;

        let a = get_or_create(&db, "cust_a").await.unwrap();
        let b = get_or_create(&db, "cust_b").await.unwrap();
        assert_ne!(a.id, b.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn lookup_of_unknown_external_id_returns_none() {
        let (db, _dir) = setup_db().await;
        let result = get_by_external_id(&db, "no-such-customer").await.unwrap();
        assert!(result.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn lookup_finds_created_customer() {
        let (db, _dir) = setup_db().await;
        let created = get_or_create(&db, "cust_x").await.unwrap();
        let found = get_by_external_id(&db, "cust_x").await.unwrap().unwrap();
        assert_eq!(created, found);
        db.close().await.unwrap();
    }
}
