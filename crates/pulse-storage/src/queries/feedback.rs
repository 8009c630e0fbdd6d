// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feedback insert and ordered retrieval.
//!
//! All reads are ordered by `created_at` descending; that column is the only
//! ordering signal exposed to readers, and two rows may share a value.

use pulse_core::PulseError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{Feedback, FeedbackRecord, Sentiment};

/// Insert a new feedback row.
pub async fn insert(db: &Database, feedback: &Feedback) -> Result<(), PulseError> {
    let feedback = feedback.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO feedback (id, customer_id, message, sentiment_label, sentiment_score, topic, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    feedback.id,
                    feedback.customer_id,
                    feedback.message,
                    feedback.sentiment_label.to_string(),
                    feedback.sentiment_score,
                    feedback.topic,
                    feedback.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List feedback joined to the owning customer's external id, newest first.
///
/// With `external_id = Some(..)` only that customer's rows are returned; a
/// filter naming an unknown customer simply matches nothing.
pub async fn list(
    db: &Database,
    external_id: Option<&str>,
) -> Result<Vec<FeedbackRecord>, PulseError> {
    let external_id = external_id.map(|s| s.to_string());
    db.connection()
        .call(move |conn| {
            let mut records = Vec::new();
            match &external_id {
                Some(filter) => {
                    let mut stmt = conn.prepare(
                        "SELECT f.id, c.external_id, f.message, f.sentiment_label, f.sentiment_score, f.topic, f.created_at
                         FROM feedback f JOIN customers c ON c.id = f.customer_id
                         WHERE c.external_id = ?1
                         ORDER BY f.created_at DESC",
                    )?;
                    let rows = stmt.query_map(params![filter], record_from_row)?;
                    for row in rows {
                        records.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT f.id, c.external_id, f.message, f.sentiment_label, f.sentiment_score, f.topic, f.created_at
                         FROM feedback f JOIN customers c ON c.id = f.customer_id
                         ORDER BY f.created_at DESC",
                    )?;
                    let rows = stmt.query_map([], record_from_row)?;
                    for row in rows {
                        records.push(row?);
                    }
                }
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all feedback for one named external customer id, newest first.
///
/// An unknown customer yields an empty Vec, not an error.
pub async fn list_for_customer(
    db: &Database,
    external_id: &str,
) -> Result<Vec<FeedbackRecord>, PulseError> {
    let external_id = external_id.to_string();
    db.connection()
        .call(move |conn| {
            let customer_id: Option<String> = {
                let mut stmt =
                    conn.prepare("SELECT id FROM customers WHERE external_id = ?1")?;
                match stmt.query_row(params![external_id], |row| row.get(0)) {
                    Ok(id) => Some(id),
                    Err(rusqlite::Error::QueryReturnedNoRows) => None,
                    Err(e) => return Err(e),
                }
            };
            let Some(customer_id) = customer_id else {
                return Ok(Vec::new());
            };

            let mut stmt = conn.prepare(
                "SELECT id, message, sentiment_label, sentiment_score, topic, created_at
                 FROM feedback WHERE customer_id = ?1
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map(params![customer_id], |row| {
                Ok(FeedbackRecord {
                    id: row.get(0)?,
                    customer_id: external_id.clone(),
                    message: row.get(1)?,
                    sentiment_label: parse_sentiment(row.get(2)?, 2)?,
                    sentiment_score: row.get(3)?,
                    topic: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Map one joined row onto the caller-facing record shape.
fn record_from_row(row: &rusqlite::Row<'_>) -> Result<FeedbackRecord, rusqlite::Error> {
    Ok(FeedbackRecord {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        message: row.get(2)?,
        sentiment_label: parse_sentiment(row.get(3)?, 3)?,
        sentiment_score: row.get(4)?,
        topic: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Parse a stored sentiment label, surfacing corruption as a conversion error.
fn parse_sentiment(label: String, column: usize) -> Result<Sentiment, rusqlite::Error> {
    label.parse::<Sentiment>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
