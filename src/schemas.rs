use common::{ErrorResponse, HealthResponse, HistoricalPoint, PredictionRequest, PredictionResult};
use moka::future::Cache;
use utoipa::OpenApi;

use crate::upstream::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the prediction backend
    pub upstream: UpstreamClient,
    /// Cache for backend responses
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Historical(Vec<HistoricalPoint>),
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::historical::get_historical,
        crate::handlers::prediction::predict,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            HistoricalPoint,
            PredictionRequest,
            PredictionResult,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "historical", description = "Historical GDP growth series"),
        (name = "prediction", description = "GDP growth predictions"),
    ),
    info(
        title = "GDP Predictor API",
        description = "Sri Lanka GDP growth predictor - proxies the model backend and serves the web frontend",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
