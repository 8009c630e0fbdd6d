// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Pulse workspace.
//!
//! All ids are system-assigned UUID v4 strings. Timestamps are ISO 8601 UTC
//! strings with millisecond precision, assigned at write time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The canonical topic identifier used when no configured topic applies.
pub const TOPIC_OTHER: &str = "other";

/// Alert reason recorded for negative-sentiment feedback.
pub const REASON_NEGATIVE_SENTIMENT: &str = "negative_sentiment";

/// Sentiment polarity of a feedback message.
///
/// Serialized lowercase on the wire and in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Result of classifying one feedback message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// Numeric intensity. Offline keyword rules report values in [-1, 1];
    /// the provider path supplies no intensity and always reports 0.0.
    pub score: f64,
    /// Canonical topic identifier from the configured vocabulary, or `other`.
    pub topic: String,
}

impl Classification {
    /// The safe default every classification failure degrades to.
    pub fn fallback() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score: 0.0,
            topic: TOPIC_OTHER.to_string(),
        }
    }
}

/// A customer identity, resolved lazily on first feedback submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Internal system-assigned id. Never exposed in API responses.
    pub id: String,
    /// Caller-supplied external identity; unique by constraint.
    pub external_id: String,
    pub created_at: String,
}

/// A stored feedback record, keyed to its owning customer's internal id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    /// Internal id of the owning customer.
    pub customer_id: String,
    pub message: String,
    pub sentiment_label: Sentiment,
    pub sentiment_score: f64,
    pub topic: String,
    pub created_at: String,
}

/// An alert raised for a stored negative-sentiment feedback record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    /// Back-reference to the triggering feedback row.
    pub feedback_id: String,
    pub reason: String,
    pub created_at: String,
}

/// Caller-facing projection of a feedback record.
///
/// The owning customer is represented by its external id; the internal
/// customer id never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,
    /// The customer's external id.
    pub customer_id: String,
    pub message: String,
    pub sentiment_label: Sentiment,
    pub sentiment_score: f64,
    pub topic: String,
    pub created_at: String,
}

impl FeedbackRecord {
    /// Project a stored feedback row onto the caller-facing shape.
    pub fn project(feedback: Feedback, external_id: impl Into<String>) -> Self {
        Self {
            id: feedback.id,
            customer_id: external_id.into(),
            message: feedback.message,
            sentiment_label: feedback.sentiment_label,
            sentiment_score: feedback.sentiment_score,
            topic: feedback.topic,
            created_at: feedback.created_at,
        }
    }
}
