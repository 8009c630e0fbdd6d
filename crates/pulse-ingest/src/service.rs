// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ingestion orchestrator composing resolver, classifier, store, and
//! alert emitter into the single write path.

use std::sync::Arc;

use pulse_core::{Classifier, Feedback, FeedbackRecord, PulseError};
use pulse_storage::{now_iso8601, queries, Database};
use tracing::{debug, error};

use crate::alert;

/// Orchestrates one feedback submission from raw input to stored, labeled
/// record.
pub struct IngestService {
    db: Database,
    classifier: Arc<dyn Classifier>,
}

impl IngestService {
    pub fn new(db: Database, classifier: Arc<dyn Classifier>) -> Self {
        Self { db, classifier }
    }

    /// The single write path: validate, resolve the customer, classify,
    /// persist, maybe alert.
    ///
    /// Steps run strictly in order and nothing is rolled back on a later
    /// failure: in particular an alert-emission failure after the feedback
    /// commit is logged and swallowed. Returns the caller-facing projection,
    /// which carries the customer's external id rather than the internal one.
    pub async fn ingest(
        &self,
        external_customer_id: &str,
        message: &str,
    ) -> Result<FeedbackRecord, PulseError> {
        if external_customer_id.trim().is_empty() || message.trim().is_empty() {
            return Err(PulseError::validation(
                "customer_id and message are required",
            ));
        }

        let customer = queries::customers::get_or_create(&self.db, external_customer_id).await?;

        let classification = self.classifier.classify(message).await;
        debug!(
            classifier = self.classifier.name(),
            sentiment = %classification.sentiment,
            topic = %classification.topic,
            "message classified"
        );

        let feedback = Feedback {
            id: uuid::Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            message: message.to_string(),
            sentiment_label: classification.sentiment,
            sentiment_score: classification.score,
            topic: classification.topic,
            created_at: now_iso8601(),
        };
        queries::feedback::insert(&self.db, &feedback).await?;

        // Alerts are best-effort notifications: the feedback row is already
        // committed, so a failure here must not unwind the request.
        if let Err(e) = alert::maybe_alert(&self.db, &feedback).await {
            error!(
                error = %e,
                feedback_id = %feedback.id,
                "alert emission failed after feedback commit"
            );
        }

        Ok(FeedbackRecord::project(feedback, customer.external_id))
    }

    /// The database handle shared with the read paths.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
