use thiserror::Error;
use tracing::debug;
use validator::ValidationErrors;

/// Failures the prediction view can surface to the user.
///
/// Every variant carries a human readable message. The controller stores
/// the error as-is and the view renders it, so messages should make sense
/// without further context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// Connectivity problems, non-success HTTP statuses, timeouts and aborts
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The backend answered but the payload does not match the schema
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// User input is out of range or not a number
    #[error("Invalid input: {0}")]
    ValidationFailure(String),
}

impl ControllerError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailure(message.into())
    }

    /// Short label used for log fields and CSS hooks.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "network",
            Self::InvalidResponse(_) => "invalid_response",
            Self::ValidationFailure(_) => "validation",
        }
    }
}

impl From<ValidationErrors> for ControllerError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();

        let message = fields
            .iter()
            .map(|field| match *field {
                "year" => format!(
                    "year must be between {} and {}",
                    common::MIN_TARGET_YEAR,
                    common::MAX_TARGET_YEAR
                ),
                "inflation" => format!(
                    "inflation rate must be between {} and {}",
                    common::MIN_INFLATION_RATE,
                    common::MAX_INFLATION_RATE
                ),
                other => format!("{} is invalid", other),
            })
            .collect::<Vec<_>>()
            .join("; ");

        let err = ControllerError::ValidationFailure(message);
        debug!(?err, "Selection failed validation");
        err
    }
}

/// Type alias for Result with ControllerError
pub type Result<T> = std::result::Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use common::Selection;

    #[test]
    fn test_validation_errors_name_the_offending_fields() {
        let errors = Selection::new(2060, 80.0).to_request().unwrap_err();
        let err = ControllerError::from(errors);

        assert_eq!(
            err,
            ControllerError::ValidationFailure(
                "inflation rate must be between 0 and 50; year must be between 2025 and 2050".to_string()
            )
        );
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_display_prefixes_the_kind() {
        let err = ControllerError::network("connection refused");
        assert_eq!(err.to_string(), "Network failure: connection refused");
    }
}
