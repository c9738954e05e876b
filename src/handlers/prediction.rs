use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use axum_valid::{Valid, ValidRejection};
use common::{ErrorResponse, PredictionRequest, PredictionResult};
use tracing::{info, instrument};

use crate::error::Result;
use crate::schemas::AppState;

/// Predict GDP growth for a target year and inflation rate
///
/// The body is range-checked before the backend is contacted; malformed or
/// out-of-range bodies get a 400 with an `ErrorResponse` body. The result
/// echoes the requested year and inflation when the backend leaves them out.
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "prediction",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Prediction computed successfully", body = PredictionResult),
        (status = 400, description = "Year or inflation out of range", body = ErrorResponse),
        (status = 502, description = "Backend failed or returned a malformed prediction", body = ErrorResponse),
        (status = 504, description = "Backend timed out", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn predict(
    State(state): State<AppState>,
    payload: std::result::Result<Valid<Json<PredictionRequest>>, ValidRejection<JsonRejection>>,
) -> Result<Json<PredictionResult>> {
    let Valid(Json(request)) = payload?;
    let mut result = state.upstream.predict(&request).await?;
    result.year.get_or_insert(request.year);
    result.inflation.get_or_insert(request.inflation);

    info!(
        year = request.year,
        inflation = request.inflation,
        average = result.average,
        "Prediction completed"
    );
    Ok(Json(result))
}
