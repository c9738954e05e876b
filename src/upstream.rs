//! HTTP client for the prediction backend.
//!
//! Every payload is decoded through the `common` schema and checked with the
//! same validators the frontend uses, so nothing malformed is passed on.

use std::time::Duration;

use common::{HistoricalPoint, PredictionRequest, PredictionResult};
use compute::validation::{validate_historical, validate_prediction};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use crate::error::{Result, ServerError};

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::Upstream(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/historical`
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn historical(&self) -> Result<Vec<HistoricalPoint>> {
        let response = self.http.get(self.url("/api/historical")).send().await?;
        let points: Vec<HistoricalPoint> = check_status(response).await?.json().await?;

        validate_historical(&points)?;
        debug!(points = points.len(), "Fetched historical series from backend");
        Ok(points)
    }

    /// `POST /api/predict`
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let response = self
            .http
            .post(self.url("/api/predict"))
            .json(request)
            .send()
            .await?;
        let prediction: PredictionResult = check_status(response).await?.json().await?;

        validate_prediction(&prediction)?;
        debug!(average = prediction.average, "Fetched prediction from backend");
        Ok(prediction)
    }

    /// True when `GET /api/health` answers with a success status.
    pub async fn is_reachable(&self) -> bool {
        match self.http.get(self.url("/api/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "Backend health probe failed");
                false
            }
        }
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The backend reports failures as `{"error": "..."}`
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("backend responded with {}", status));

    warn!(%status, %message, "Backend returned an error status");
    Err(match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ServerError::Validation(message),
        _ => ServerError::Upstream(message),
    })
}
