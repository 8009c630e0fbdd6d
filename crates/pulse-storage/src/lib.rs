// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Pulse feedback service.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed query
//! operations for customers, feedback, and alerts.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::{now_iso8601, Database};
pub use models::*;
