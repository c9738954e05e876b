use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MIN_TARGET_YEAR: i32 = 2025;
pub const MAX_TARGET_YEAR: i32 = 2050;
pub const MIN_INFLATION_RATE: f64 = 0.0;
pub const MAX_INFLATION_RATE: f64 = 50.0;

/// Selection shown when the page first loads.
pub const DEFAULT_TARGET_YEAR: i32 = 2030;
pub const DEFAULT_INFLATION_RATE: f64 = 6.5;

/// Request body for `POST /api/predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct PredictionRequest {
    /// Target year of the prediction
    #[validate(range(min = MIN_TARGET_YEAR, max = MAX_TARGET_YEAR))]
    pub year: i32,
    /// Inflation rate in percent
    #[validate(range(min = MIN_INFLATION_RATE, max = MAX_INFLATION_RATE))]
    pub inflation: f64,
}

/// Response body of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResult {
    /// Linear regression model prediction (percent)
    #[serde(rename = "lr_prediction")]
    pub linear_regression: f64,
    /// Random forest model prediction (percent)
    #[serde(rename = "rf_prediction")]
    pub random_forest: f64,
    /// Mean of both model predictions (percent)
    #[serde(rename = "avg_prediction")]
    pub average: f64,
    /// Target year echoed back by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Inflation rate echoed back by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation: Option<f64>,
}

impl PredictionResult {
    pub fn new(linear_regression: f64, random_forest: f64, average: f64) -> Self {
        Self {
            linear_regression,
            random_forest,
            average,
            year: None,
            inflation: None,
        }
    }

    /// True when all three predictions are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.linear_regression.is_finite() && self.random_forest.is_finite() && self.average.is_finite()
    }
}

/// The target year and inflation rate currently chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub target_year: i32,
    pub inflation_rate: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            inflation_rate: DEFAULT_INFLATION_RATE,
        }
    }
}

impl Selection {
    pub fn new(target_year: i32, inflation_rate: f64) -> Self {
        Self {
            target_year,
            inflation_rate,
        }
    }

    /// Builds the request body, rejecting out-of-range or non-finite values.
    pub fn to_request(&self) -> Result<PredictionRequest, ValidationErrors> {
        let request = PredictionRequest {
            year: self.target_year,
            inflation: self.inflation_rate,
        };

        // Range checks compare with `<`/`>`, which NaN slips through.
        if !request.inflation.is_finite() {
            let mut errors = ValidationErrors::new();
            errors.add("inflation", ValidationError::new("finite"));
            return Err(errors);
        }

        request.validate()?;
        Ok(request)
    }
}
