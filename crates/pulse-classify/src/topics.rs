// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configured topic vocabulary and label canonicalization.

use pulse_core::types::TOPIC_OTHER;

/// The immutable topic vocabulary, loaded once at startup.
///
/// Holds the human-readable labels in presentation order (as shown to the
/// provider) and their canonical machine identifiers.
#[derive(Debug, Clone)]
pub struct TopicSet {
    labels: Vec<String>,
    canonical: Vec<String>,
}

impl TopicSet {
    pub fn new(labels: Vec<String>) -> Self {
        let canonical = labels.iter().map(|l| canonicalize(l)).collect();
        Self { labels, canonical }
    }

    /// Human-readable labels, in configured order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether a canonical identifier belongs to the configured vocabulary.
    pub fn contains(&self, canonical: &str) -> bool {
        self.canonical.iter().any(|c| c == canonical)
    }

    /// Canonicalize an arbitrary label and clamp it to the vocabulary.
    ///
    /// Labels whose canonical form is not in the configured set (an
    /// untrusted provider may answer anything) resolve to `other`, keeping
    /// the stored-topic invariant intact.
    pub fn resolve(&self, label: &str) -> String {
        let canonical = canonicalize(label);
        if self.contains(&canonical) {
            canonical
        } else {
            TOPIC_OTHER.to_string()
        }
    }
}

/// Map a human-readable topic label to its canonical identifier.
///
/// A small explicit override table covers the multi-word labels whose
/// canonical form is established usage; everything else is trimmed,
/// lowercased, and space-separated words joined with underscores.
pub fn canonicalize(label: &str) -> String {
    let normalized = label.trim().to_lowercase();
    match normalized.as_str() {
        "product quality" => "product_quality".to_string(),
        "customer service" => "customer_service".to_string(),
        _ => normalized.replace(' ', "_"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> TopicSet {
        TopicSet::new(
            [
                "product quality",
                "delivery",
                "pricing",
                "customer service",
                "other",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    #[test]
    fn override_table_entries_canonicalize() {
        assert_eq!(canonicalize("product quality"), "product_quality");
        assert_eq!(canonicalize("customer service"), "customer_service");
    }

    #[test]
    fn canonicalization_is_case_and_whitespace_insensitive() {
        assert_eq!(canonicalize("Product Quality"), "product_quality");
        assert_eq!(canonicalize("  Customer Service  "), "customer_service");
        assert_eq!(canonicalize("DELIVERY"), "delivery");
    }

    #[test]
    fn arbitrary_multiword_labels_get_underscores() {
        assert_eq!(canonicalize("Billing and Refunds"), "billing_and_refunds");
        assert_eq!(canonicalize("shipping speed"), "shipping_speed");
    }

    #[test]
    fn resolve_keeps_vocabulary_members() {
        let topics = default_set();
        assert_eq!(topics.resolve("Product Quality"), "product_quality");
        assert_eq!(topics.resolve("delivery"), "delivery");
    }

    #[test]
    fn resolve_clamps_unknown_labels_to_other() {
        let topics = default_set();
        assert_eq!(topics.resolve("weather"), "other");
        assert_eq!(topics.resolve("Billing and Refunds"), "other");
    }

    #[test]
    fn contains_checks_canonical_forms() {
        let topics = default_set();
        assert!(topics.contains("customer_service"));
        assert!(!topics.contains("customer service"));
    }
}
