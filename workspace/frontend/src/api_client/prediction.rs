use common::{PredictionRequest, PredictionResult};
use compute::ControllerError;
use crate::api_client::{self, RequestHandle};

/// Requests a GDP-growth prediction for the given year and inflation rate.
pub async fn request_prediction(
    request: &PredictionRequest,
    handle: &RequestHandle,
) -> Result<PredictionResult, ControllerError> {
    log::trace!(
        "Requesting prediction for year {} at {}% inflation",
        request.year,
        request.inflation
    );

    let result = api_client::post::<PredictionResult, _>("/predict", request, handle).await;

    match &result {
        Ok(prediction) => log::info!(
            "Prediction received: lr={} rf={} avg={}",
            prediction.linear_regression,
            prediction.random_forest,
            prediction.average
        ),
        Err(e) => log::error!("Failed to request prediction: {}", e),
    }

    result
}
