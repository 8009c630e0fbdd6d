// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Pulse feedback service, built on axum.
//!
//! The write path (`POST /feedback`) routes through
//! [`pulse_ingest::IngestService`]; the read paths query the store
//! directly, bypassing the classifier and alert emitter.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, AppState};
