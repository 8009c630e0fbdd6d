// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification strategies for the Pulse feedback service.
//!
//! Two implementations of [`pulse_core::Classifier`] exist behind the same
//! contract: [`KeywordClassifier`] (deterministic keyword rules, no network
//! dependency) and [`ProviderClassifier`] (delegates to an external
//! chat-completions service). The strategy is chosen once at startup from
//! configuration; the rest of the pipeline only sees the trait.

pub mod keyword;
pub mod provider;
pub mod topics;

use std::sync::Arc;

use pulse_config::{ClassifierMode, PulseConfig};
use pulse_core::{Classifier, PulseError};

pub use keyword::KeywordClassifier;
pub use provider::ProviderClassifier;
pub use topics::TopicSet;

/// Construct the configured classification strategy.
pub fn classifier_from_config(config: &PulseConfig) -> Result<Arc<dyn Classifier>, PulseError> {
    match config.classifier.mode {
        ClassifierMode::Offline => Ok(Arc::new(KeywordClassifier::new())),
        ClassifierMode::Provider => {
            let topics = TopicSet::new(config.topics.labels.clone());
            Ok(Arc::new(ProviderClassifier::new(&config.provider, topics)?))
        }
    }
}
