// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the feedback REST API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use pulse_core::{Alert, FeedbackRecord, PulseError};
use pulse_storage::queries;

use crate::server::AppState;

/// Request body for POST /feedback.
#[derive(Debug, Deserialize)]
pub struct FeedbackCreateRequest {
    /// External customer identifier.
    pub customer_id: String,
    /// Feedback message text.
    pub message: String,
}

/// Query parameters for GET /feedback.
#[derive(Debug, Deserialize)]
pub struct FeedbackListParams {
    /// Optional external customer id filter.
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// Response body for GET /healthz.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Wrapper mapping [`PulseError`] onto HTTP responses.
///
/// Validation failures are the caller's fault (400); everything else that
/// escapes a handler is a storage or internal failure (500). Classifier
/// failures never reach this mapping: they degrade to the neutral fallback
/// inside the classifier.
#[derive(Debug)]
pub struct ApiError(PulseError);

impl From<PulseError> for ApiError {
    fn from(err: PulseError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PulseError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

/// POST /feedback
///
/// Ingest one feedback message: resolve the customer, classify, persist,
/// and conditionally raise an alert. Returns the stored record with the
/// customer represented by its external id.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(body): Json<FeedbackCreateRequest>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let record = state.ingest.ingest(&body.customer_id, &body.message).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /feedback?customer_id=<external_id>
///
/// All feedback, newest first, optionally filtered to one customer.
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackListParams>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let records = queries::feedback::list(&state.db, params.customer_id.as_deref()).await?;
    Ok(Json(records))
}

/// GET /customers/{external_id}/feedback
///
/// Feedback scoped to one customer, newest first. An unknown customer
/// yields an empty array, not an error.
pub async fn list_customer_feedback(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let records = queries::feedback::list_for_customer(&state.db, &external_id).await?;
    Ok(Json(records))
}

/// GET /alerts
///
/// All alerts, newest first.
pub async fn list_alerts(State(state): State<AppState>) -> Result<Json<Vec<Alert>>, ApiError> {
    let alerts = queries::alerts::list(&state.db).await?;
    Ok(Json(alerts))
}

/// GET /healthz
///
/// Liveness probe; verifies the store answers a trivial query.
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.db.ping().await?;
    Ok(Json(HealthResponse { ok: true }))
}
