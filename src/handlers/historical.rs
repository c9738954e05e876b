use axum::{extract::State, response::Json};
use common::{ErrorResponse, HistoricalPoint};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::schemas::{AppState, CachedData};

const HISTORICAL_CACHE_KEY: &str = "historical";

/// Historical GDP growth series, ordered by year
#[utoipa::path(
    get,
    path = "/api/historical",
    tag = "historical",
    responses(
        (status = 200, description = "Historical series retrieved successfully", body = Vec<HistoricalPoint>),
        (status = 502, description = "Backend failed or returned a malformed series", body = ErrorResponse),
        (status = 504, description = "Backend timed out", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_historical(State(state): State<AppState>) -> Result<Json<Vec<HistoricalPoint>>> {
    if let Some(CachedData::Historical(points)) = state.cache.get(HISTORICAL_CACHE_KEY).await {
        debug!(points = points.len(), "Historical series served from cache");
        return Ok(Json(points));
    }

    let points = state.upstream.historical().await?;

    state
        .cache
        .insert(HISTORICAL_CACHE_KEY.to_string(), CachedData::Historical(points.clone()))
        .await;

    Ok(Json(points))
}
