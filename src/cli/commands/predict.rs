use anyhow::{anyhow, Result};
use compute::validation::{parse_inflation, parse_year};
use compute::{ControllerError, ControllerState, Event, RequestSequencer};
use std::fmt::Write;
use tracing::{debug, info, warn};

use crate::config::load_settings;
use crate::upstream::UpstreamClient;

pub async fn predict(
    year: &str,
    inflation: &str,
    backend_url: Option<String>,
    json: bool,
) -> Result<()> {
    let settings = load_settings()?.with_overrides(None, backend_url, None, None);
    let upstream = UpstreamClient::new(&settings.backend_url, settings.request_timeout())?;

    let state = run_prediction(&upstream, year, inflation).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state.chart)?);
    } else {
        print!("{}", render_report(&state));
    }
    Ok(())
}

/// Drives the prediction view state through one full request cycle.
///
/// A failed historical fetch is reported but does not stop the prediction;
/// the chart then only holds the predicted years.
pub async fn run_prediction(
    upstream: &UpstreamClient,
    year: &str,
    inflation: &str,
) -> Result<ControllerState> {
    let mut sequencer = RequestSequencer::new();
    let mut state = ControllerState::default().apply(Event::HistoricalRequested);

    state = match upstream.historical().await {
        Ok(points) => state.apply(Event::HistoricalLoaded(points)),
        Err(e) => {
            warn!("Historical series unavailable: {}", e);
            state.apply(Event::HistoricalFailed(ControllerError::from(&e)))
        }
    };

    state = state
        .apply(Event::YearChanged(parse_year(year)?))
        .apply(Event::InflationChanged(parse_inflation(inflation)?));

    let request = state.prepare_request()?;
    let ticket = sequencer.issue();
    debug!(%ticket, ?request, "Requesting prediction");
    state = state.apply(Event::PredictionRequested(ticket));

    state = match upstream.predict(&request).await {
        Ok(result) => state.apply(Event::PredictionReceived { ticket, result }),
        Err(e) => state.apply(Event::PredictionFailed {
            ticket,
            error: ControllerError::from(&e),
        }),
    };

    if state.prediction.is_none() {
        let error = state
            .error
            .clone()
            .unwrap_or_else(|| ControllerError::network("no prediction received"));
        return Err(anyhow!(error));
    }

    info!(ticket = %ticket, "Prediction received");
    Ok(state)
}

/// Formats predictions, outlook and chart series for the terminal.
pub fn render_report(state: &ControllerState) -> String {
    let mut out = String::new();

    if let Some(prediction) = &state.prediction {
        let _ = writeln!(
            out,
            "GDP growth prediction for {} at {:.1}% inflation",
            state.selection.target_year, state.selection.inflation_rate
        );
        let _ = writeln!(out, "  Linear Regression: {:>7.2}%", prediction.linear_regression);
        let _ = writeln!(out, "  Random Forest:     {:>7.2}%", prediction.random_forest);
        let _ = writeln!(out, "  Average:           {:>7.2}%", prediction.average);
    }
    if let Some(outlook) = state.outlook() {
        let _ = writeln!(out, "\n{}", outlook.message());
    }

    let _ = writeln!(out, "\n{:<6} {:>12} {:>12}", "Year", "Historical", "Predicted");
    for point in &state.chart {
        let _ = writeln!(
            out,
            "{:<6} {:>12} {:>12}",
            point.year,
            format_cell(point.gdp_growth),
            format_cell(point.predicted_gdp_growth),
        );
    }
    out
}

fn format_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}
