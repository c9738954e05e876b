use common::HistoricalPoint;
use compute::ControllerError;
use crate::api_client::{self, RequestHandle};

/// Fetches the full historical GDP-growth series.
pub async fn get_historical(handle: &RequestHandle) -> Result<Vec<HistoricalPoint>, ControllerError> {
    log::trace!("Fetching historical GDP growth series");

    let result = api_client::get::<Vec<HistoricalPoint>>("/historical", handle).await;

    match &result {
        Ok(points) => log::info!("Fetched {} historical points", points.len()),
        Err(e) => log::error!("Failed to fetch historical series: {}", e),
    }

    result
}
