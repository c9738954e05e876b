use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_valid::ValidRejection;
use common::ErrorResponse;
use compute::ControllerError;
use thiserror::Error;
use tracing::error;

/// Failures of the proxy endpoints.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The backend could not be reached or answered with an error status
    #[error("Prediction backend error: {0}")]
    Upstream(String),

    /// The backend did not answer in time
    #[error("Prediction backend timed out")]
    UpstreamTimeout,

    /// The backend answered with a payload that does not match the schema
    #[error("Invalid response from prediction backend: {0}")]
    InvalidUpstreamResponse(String),

    /// The request itself is invalid
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Upstream(_) | ServerError::InvalidUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
            ServerError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Upstream(_) => "UPSTREAM_ERROR",
            ServerError::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            ServerError::InvalidUpstreamResponse(_) => "INVALID_UPSTREAM_RESPONSE",
            ServerError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServerError::UpstreamTimeout
        } else if err.is_decode() {
            ServerError::InvalidUpstreamResponse(err.to_string())
        } else {
            ServerError::Upstream(err.to_string())
        }
    }
}

impl From<ControllerError> for ServerError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::NetworkFailure(msg) => ServerError::Upstream(msg),
            ControllerError::InvalidResponse(msg) => ServerError::InvalidUpstreamResponse(msg),
            ControllerError::ValidationFailure(msg) => ServerError::Validation(msg),
        }
    }
}

impl From<ValidRejection<JsonRejection>> for ServerError {
    fn from(rejection: ValidRejection<JsonRejection>) -> Self {
        match rejection {
            ValidRejection::Valid(errors) => ControllerError::from(errors).into(),
            ValidRejection::Inner(rejection) => ServerError::Validation(rejection.body_text()),
        }
    }
}

impl From<&ServerError> for ControllerError {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::Upstream(_) | ServerError::UpstreamTimeout => ControllerError::network(err.to_string()),
            ServerError::InvalidUpstreamResponse(msg) => ControllerError::invalid_response(msg.clone()),
            ServerError::Validation(msg) => ControllerError::validation(msg.clone()),
        }
    }
}

impl From<&ServerError> for ErrorResponse {
    fn from(err: &ServerError) -> Self {
        ErrorResponse::new(err.to_string(), err.code())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(%status, error = %self, "Request failed");
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
