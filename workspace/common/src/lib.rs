//! Common transport-layer types shared between the server and the frontend.
//! The field names here are the wire contract of the prediction backend, so
//! both sides decode through the same structs instead of re-declaring shapes.

mod historical;
mod prediction;

pub use historical::HistoricalPoint;
pub use prediction::{
    PredictionRequest, PredictionResult, Selection, DEFAULT_INFLATION_RATE, DEFAULT_TARGET_YEAR,
    MAX_INFLATION_RATE, MAX_TARGET_YEAR, MIN_INFLATION_RATE, MIN_TARGET_YEAR,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the server for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Machine readable error code
    pub code: String,
    /// Success flag (always false)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction backend status ("reachable" or "unreachable")
    pub backend: String,
}
