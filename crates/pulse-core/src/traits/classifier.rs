// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classifier trait implemented by the offline and provider strategies.

use async_trait::async_trait;

use crate::types::Classification;

/// Maps raw feedback text to a sentiment/score/topic triple.
///
/// The operating mode (deterministic keyword rules vs. an external
/// completion provider) is chosen once at startup; callers hold a
/// `dyn Classifier` and never branch on the mode themselves.
///
/// `classify` is infallible by contract: implementations map every internal
/// failure (network, decode, schema mismatch) to
/// [`Classification::fallback`] rather than surfacing an error, so ingestion
/// always completes once validation passes.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short strategy name for logging.
    fn name(&self) -> &str;

    /// Classify one feedback message.
    async fn classify(&self, text: &str) -> Classification;
}
