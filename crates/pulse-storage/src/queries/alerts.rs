// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Alert insert and ordered retrieval.

use pulse_core::PulseError;
use rusqlite::params;

use crate::database::Database;
use crate::models::Alert;

/// Insert a new alert row.
///
/// No uniqueness is enforced on `feedback_id`: inserting twice for one
/// feedback id yields two rows.
pub async fn insert(db: &Database, alert: &Alert) -> Result<(), PulseError> {
    let alert = alert.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO alerts (id, feedback_id, reason, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![alert.id, alert.feedback_id, alert.reason, alert.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all alerts, newest first.
pub async fn list(db: &Database) -> Result<Vec<Alert>, PulseError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, feedback_id, reason, created_at FROM alerts
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Alert {
                    id: row.get(0)?,
                    feedback_id: row.get(1)?,
                    reason: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?;
            let mut alerts = Vec::new();
            for row in rows {
                alerts.push(row?);
            }
            Ok(alerts)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
