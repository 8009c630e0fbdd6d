// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core definitions for the Pulse feedback intelligence service.
//!
//! Provides the workspace-wide error type, the domain model (customers,
//! feedback, alerts, classification results), and the [`Classifier`] trait
//! implemented by the concrete classification strategies.

pub mod error;
pub mod traits;
pub mod types;

pub use error::PulseError;
pub use traits::classifier::Classifier;
pub use types::{Alert, Classification, Customer, Feedback, FeedbackRecord, Sentiment};
