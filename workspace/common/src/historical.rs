use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One observed year of the historical GDP-growth series.
///
/// Serialized as `{"Year": 2023, "GDP Growth": 4.2}`, the shape served by
/// `GET /api/historical`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoricalPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    /// Annual GDP growth in percent
    #[serde(rename = "GDP Growth")]
    pub gdp_growth: f64,
}

impl HistoricalPoint {
    pub fn new(year: i32, gdp_growth: f64) -> Self {
        Self { year, gdp_growth }
    }
}
