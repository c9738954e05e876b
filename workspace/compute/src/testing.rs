//! Shared fixtures for the compute unit tests.

use common::{HistoricalPoint, PredictionResult};

/// Annual GDP growth of Sri Lanka, World Bank series, 2015 to 2023.
pub fn historical_fixture() -> Vec<HistoricalPoint> {
    vec![
        HistoricalPoint::new(2015, 4.98),
        HistoricalPoint::new(2016, 4.49),
        HistoricalPoint::new(2017, 3.58),
        HistoricalPoint::new(2018, 2.31),
        HistoricalPoint::new(2019, -0.22),
        HistoricalPoint::new(2020, -4.62),
        HistoricalPoint::new(2021, 4.21),
        HistoricalPoint::new(2022, -7.35),
        HistoricalPoint::new(2023, -2.3),
    ]
}

/// A prediction whose two model outputs straddle `average`.
pub fn prediction_with_average(average: f64) -> PredictionResult {
    PredictionResult::new(average - 0.5, average + 0.5, average)
}
