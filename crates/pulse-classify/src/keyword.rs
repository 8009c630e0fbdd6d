// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic keyword classification, the offline operating mode.

use async_trait::async_trait;

use pulse_core::types::TOPIC_OTHER;
use pulse_core::{Classification, Classifier, Sentiment};

/// Keyword sets scanned in fixed priority order. The rules are mutually
/// exclusive by evaluation order, not by content: a message matching both
/// a negative and a positive set takes the earlier rule.
const NEGATIVE_PRODUCT_KEYWORDS: &[&str] = &["terrible", "broken", "defective", "bad"];
const DELIVERY_KEYWORDS: &[&str] = &["late", "delivery", "courier"];
const POSITIVE_KEYWORDS: &[&str] = &["great", "excellent", "love"];

/// Offline classifier scanning lowercased text for fixed keyword sets.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn evaluate(text: &str) -> Classification {
        let text = text.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

        if matches(NEGATIVE_PRODUCT_KEYWORDS) {
            return Classification {
                sentiment: Sentiment::Negative,
                score: -0.8,
                topic: "product_quality".to_string(),
            };
        }
        if matches(DELIVERY_KEYWORDS) {
            return Classification {
                sentiment: Sentiment::Negative,
                score: -0.5,
                topic: "delivery".to_string(),
            };
        }
        if matches(POSITIVE_KEYWORDS) {
            return Classification {
                sentiment: Sentiment::Positive,
                score: 0.8,
                topic: "product_quality".to_string(),
            };
        }
        Classification {
            sentiment: Sentiment::Neutral,
            score: 0.0,
            topic: TOPIC_OTHER.to_string(),
        }
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword-offline"
    }

    async fn classify(&self, text: &str) -> Classification {
        Self::evaluate(text)
    }
}
