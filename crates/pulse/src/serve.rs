// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pulse serve` command implementation.
//!
//! Wires configuration into the storage layer, the configured
//! classification strategy, the ingestion service, and the HTTP gateway,
//! then serves until the process exits.

use std::sync::Arc;

use pulse_classify::classifier_from_config;
use pulse_config::PulseConfig;
use pulse_core::PulseError;
use pulse_gateway::{start_server, AppState};
use pulse_ingest::IngestService;
use pulse_storage::Database;
use tracing::info;

/// Runs the `pulse serve` command.
pub async fn run_serve(config: PulseConfig) -> Result<(), PulseError> {
    init_tracing(&config.service.log_level);

    info!("starting pulse serve");

    let db = Database::open(&config.storage).await?;
    info!(path = %config.storage.database_path, "storage initialized");

    let classifier = classifier_from_config(&config)?;
    info!(strategy = classifier.name(), "classifier initialized");

    let ingest = Arc::new(IngestService::new(db.clone(), classifier));
    let state = AppState::new(ingest, db);

    start_server(&config.server, state).await
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,pulse={l},pulse_core={l},pulse_config={l},pulse_storage={l},\
             pulse_classify={l},pulse_ingest={l},pulse_gateway={l}",
            l = log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
