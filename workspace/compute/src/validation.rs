//! Checks applied at the boundary, before anything reaches controller state.

use common::{HistoricalPoint, PredictionResult, MAX_TARGET_YEAR};

use crate::error::{ControllerError, Result};

/// Earliest year accepted in a historical series.
pub const MIN_HISTORICAL_YEAR: i32 = 1900;

/// Historical points must have finite values and strictly increasing years
/// within `MIN_HISTORICAL_YEAR..=MAX_TARGET_YEAR`.
pub fn validate_historical(points: &[HistoricalPoint]) -> Result<()> {
    if let Some(point) = points
        .iter()
        .find(|p| !(MIN_HISTORICAL_YEAR..=MAX_TARGET_YEAR).contains(&p.year))
    {
        return Err(ControllerError::invalid_response(format!(
            "historical year {} is outside {}-{}",
            point.year, MIN_HISTORICAL_YEAR, MAX_TARGET_YEAR
        )));
    }

    if let Some(point) = points.iter().find(|p| !p.gdp_growth.is_finite()) {
        return Err(ControllerError::invalid_response(format!(
            "historical GDP growth for {} is not a number",
            point.year
        )));
    }

    if let Some(pair) = points.windows(2).find(|w| w[0].year >= w[1].year) {
        return Err(ControllerError::invalid_response(format!(
            "historical years are not strictly increasing ({} followed by {})",
            pair[0].year, pair[1].year
        )));
    }

    Ok(())
}

pub fn validate_prediction(result: &PredictionResult) -> Result<()> {
    if !result.is_finite() {
        return Err(ControllerError::invalid_response(
            "prediction contains a non-numeric value",
        ));
    }
    Ok(())
}

/// Parses the target year typed into the form.
pub fn parse_year(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ControllerError::validation(format!("'{}' is not a whole year", input.trim())))
}

/// Parses the inflation rate typed into the form.
pub fn parse_inflation(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ControllerError::validation(format!(
            "'{}' is not a valid inflation rate",
            input.trim()
        ))),
    }
}
