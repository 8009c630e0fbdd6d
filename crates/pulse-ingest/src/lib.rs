// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The feedback write path: validation, customer resolution,
//! classification, persistence, and conditional alerting.

pub mod alert;
pub mod service;

pub use service::IngestService;
