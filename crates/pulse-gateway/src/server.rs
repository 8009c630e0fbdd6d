// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use pulse_config::model::ServerConfig;
use pulse_core::PulseError;
use pulse_ingest::IngestService;
use pulse_storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The write-path orchestrator.
    pub ingest: Arc<IngestService>,
    /// Store handle for the read paths.
    pub db: Database,
}

impl AppState {
    pub fn new(ingest: Arc<IngestService>, db: Database) -> Self {
        Self { ingest, db }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/feedback",
            post(handlers::create_feedback).get(handlers::list_feedback),
        )
        .route(
            "/customers/{external_id}/feedback",
            get(handlers::list_customer_feedback),
        )
        .route("/alerts", get(handlers::list_alerts))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the process exits.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), PulseError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PulseError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| PulseError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
