use axum::{extract::State, response::Json};
use common::HealthResponse;
use tracing::{instrument, warn};

use crate::schemas::AppState;

/// Health check endpoint
///
/// Always answers 200; the `backend` field reports whether the prediction
/// backend answered its own health probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = if state.upstream.is_reachable().await {
        "reachable"
    } else {
        warn!(backend_url = state.upstream.base_url(), "Prediction backend unreachable");
        "unreachable"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: backend.to_string(),
    })
}
