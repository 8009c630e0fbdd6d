// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conditional alert emission for stored feedback.

use pulse_core::types::REASON_NEGATIVE_SENTIMENT;
use pulse_core::{Alert, Feedback, PulseError, Sentiment};
use pulse_storage::{now_iso8601, queries, Database};
use tracing::warn;

/// Message preview length in the warning notification.
const PREVIEW_CHARS: usize = 80;

/// Persist an alert for a stored feedback record if its sentiment is
/// negative, and emit a warning-level notification. No-op otherwise.
///
/// Not idempotent: invoked twice for one feedback id this inserts two
/// alert rows. The write path only calls it once per ingestion.
pub async fn maybe_alert(db: &Database, feedback: &Feedback) -> Result<(), PulseError> {
    if feedback.sentiment_label != Sentiment::Negative {
        return Ok(());
    }

    let alert = Alert {
        id: uuid::Uuid::new_v4().to_string(),
        feedback_id: feedback.id.clone(),
        reason: REASON_NEGATIVE_SENTIMENT.to_string(),
        created_at: now_iso8601(),
    };
    queries::alerts::insert(db, &alert).await?;

    let preview: String = feedback.message.chars().take(PREVIEW_CHARS).collect();
    warn!(
        feedback_id = %feedback.id,
        customer_id = %feedback.customer_id,
        preview = %preview,
        "negative feedback alert"
    );
    Ok(())
}
