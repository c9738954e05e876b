use common::{HistoricalPoint, PredictionResult, MAX_TARGET_YEAR};
use serde::Serialize;
use tracing::{instrument, trace};

/// Last observed year assumed when the historical series is empty.
///
/// This is a fixed stand-in, not derived from any data boundary. With an
/// empty history the projection starts at `FALLBACK_LAST_YEAR + 1`.
pub const FALLBACK_LAST_YEAR: i32 = 2024;

/// One x-axis entry of the rendered chart.
///
/// Absent values are gaps in the corresponding line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ChartPoint {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdp_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_gdp_growth: Option<f64>,
}

impl ChartPoint {
    pub fn historical(year: i32, gdp_growth: f64) -> Self {
        Self {
            year,
            gdp_growth: Some(gdp_growth),
            predicted_gdp_growth: None,
        }
    }

    pub fn predicted(year: i32, predicted_gdp_growth: f64) -> Self {
        Self {
            year,
            gdp_growth: None,
            predicted_gdp_growth: Some(predicted_gdp_growth),
        }
    }
}

impl From<&HistoricalPoint> for ChartPoint {
    fn from(point: &HistoricalPoint) -> Self {
        ChartPoint::historical(point.year, point.gdp_growth)
    }
}

/// Builds the chart series from the historical data and the latest prediction.
///
/// Without a prediction the historical series is returned as-is. With one,
/// the last historical point also carries its own value on the predicted
/// line (so both lines meet), and every year after it up to `target_year`
/// gets the flat average prediction. A `target_year` at or before the last
/// historical year appends nothing, and the projection never runs past
/// `MAX_TARGET_YEAR`.
///
/// The result depends only on the three inputs; callers recompute it
/// whenever any of them changes.
#[instrument(skip(historical, prediction), fields(points = historical.len(), has_prediction = prediction.is_some()))]
pub fn chart_series(
    historical: &[HistoricalPoint],
    prediction: Option<&PredictionResult>,
    target_year: i32,
) -> Vec<ChartPoint> {
    let mut series: Vec<ChartPoint> = historical.iter().map(ChartPoint::from).collect();

    let Some(prediction) = prediction else {
        trace!("No prediction, chart mirrors historical series");
        return series;
    };

    if let Some(junction) = series.last_mut() {
        junction.predicted_gdp_growth = junction.gdp_growth;
    }

    let last_year = historical
        .last()
        .map(|point| point.year)
        .unwrap_or(FALLBACK_LAST_YEAR);

    let end_year = target_year.min(MAX_TARGET_YEAR);
    if let Some(first_year) = last_year.checked_add(1) {
        series.extend((first_year..=end_year).map(|year| ChartPoint::predicted(year, prediction.average)));
    }

    trace!(
        last_year,
        target_year,
        total = series.len(),
        "Appended projected years to chart series"
    );
    series
}
