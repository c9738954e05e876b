//! State of the prediction view and the pure transition function driving it.
//!
//! The view owns one [`ControllerState`] and feeds it [`Event`]s: user input,
//! request bookkeeping and network completions. Every transition either
//! applies fully or leaves the state untouched apart from the surfaced error,
//! and the chart series is rebuilt from scratch whenever one of its inputs
//! changes.

use common::{HistoricalPoint, PredictionRequest, PredictionResult, Selection};
use tracing::{debug, trace, warn};

use crate::chart::{chart_series, ChartPoint};
use crate::error::{ControllerError, Result};
use crate::interpretation::Outlook;
use crate::sequencer::RequestTicket;
use crate::validation::{validate_historical, validate_prediction};

/// Progress of the one-time historical series fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoricalStatus {
    #[default]
    Loading,
    Loaded(Vec<HistoricalPoint>),
    Failed(ControllerError),
}

impl HistoricalStatus {
    /// The loaded points, or an empty slice while loading or after a failure.
    pub fn points(&self) -> &[HistoricalPoint] {
        match self {
            HistoricalStatus::Loaded(points) => points,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HistoricalStatus::Loading)
    }
}

/// Everything that can happen to the prediction view.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The historical fetch was (re)started
    HistoricalRequested,
    HistoricalLoaded(Vec<HistoricalPoint>),
    HistoricalFailed(ControllerError),
    YearChanged(i32),
    InflationChanged(f64),
    /// Form input that could not be turned into a selection
    InputRejected(ControllerError),
    PredictionRequested(RequestTicket),
    PredictionReceived {
        ticket: RequestTicket,
        result: PredictionResult,
    },
    PredictionFailed {
        ticket: RequestTicket,
        error: ControllerError,
    },
    ErrorDismissed,
}

/// What the chart area shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartDisplay<'a> {
    Loading,
    /// History failed and there is nothing to plot
    Failed(&'a ControllerError),
    Empty,
    /// `history_error` is set when only projected years could be plotted
    Chart {
        history_error: Option<&'a ControllerError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub selection: Selection,
    pub historical: HistoricalStatus,
    pub prediction: Option<PredictionResult>,
    /// Derived from `historical`, `prediction` and `selection.target_year`
    pub chart: Vec<ChartPoint>,
    /// Outstanding prediction request, if the latest one has not completed
    pub pending: Option<RequestTicket>,
    /// Most recently issued prediction request
    pub latest_ticket: Option<RequestTicket>,
    /// Error to surface to the user
    pub error: Option<ControllerError>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}

impl ControllerState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            historical: HistoricalStatus::Loading,
            prediction: None,
            chart: Vec::new(),
            pending: None,
            latest_ticket: None,
            error: None,
        }
    }

    /// Applies one event and returns the resulting state.
    pub fn apply(mut self, event: Event) -> Self {
        trace!(?event, "Applying controller event");

        match event {
            Event::HistoricalRequested => {
                if matches!(self.historical, HistoricalStatus::Loaded(_)) {
                    debug!("Historical series already loaded, ignoring reload");
                    return self;
                }
                self.historical = HistoricalStatus::Loading;
                self.error = None;
            }
            Event::HistoricalLoaded(points) => match validate_historical(&points) {
                Ok(()) => {
                    debug!(points = points.len(), "Historical series loaded");
                    self.historical = HistoricalStatus::Loaded(points);
                    self.recompute_chart();
                }
                Err(err) => {
                    warn!(%err, "Rejected historical series");
                    self.historical = HistoricalStatus::Failed(err.clone());
                    self.error = Some(err);
                }
            },
            Event::HistoricalFailed(err) => {
                warn!(%err, "Historical series fetch failed");
                self.historical = HistoricalStatus::Failed(err.clone());
                self.error = Some(err);
            }
            Event::YearChanged(year) => {
                self.selection.target_year = year;
                self.recompute_chart();
            }
            Event::InflationChanged(rate) => {
                self.selection.inflation_rate = rate;
            }
            Event::InputRejected(err) => {
                debug!(%err, "Form input rejected");
                self.error = Some(err);
            }
            Event::PredictionRequested(ticket) => {
                if self.latest_ticket.is_some_and(|latest| ticket < latest) {
                    debug!(%ticket, "Ignoring request older than the latest one");
                    return self;
                }
                self.latest_ticket = Some(ticket);
                self.pending = Some(ticket);
                self.error = None;
            }
            Event::PredictionReceived { ticket, result } => {
                if !self.is_latest(ticket) {
                    debug!(%ticket, "Dropping superseded prediction response");
                    return self;
                }
                self.pending = None;
                match validate_prediction(&result) {
                    Ok(()) => {
                        debug!(%ticket, average = result.average, "Prediction applied");
                        self.prediction = Some(result);
                        self.error = None;
                        self.recompute_chart();
                    }
                    Err(err) => {
                        warn!(%ticket, %err, "Rejected prediction response");
                        self.error = Some(err);
                    }
                }
            }
            Event::PredictionFailed { ticket, error } => {
                if !self.is_latest(ticket) {
                    debug!(%ticket, "Dropping failure of superseded request");
                    return self;
                }
                warn!(%ticket, err = %error, "Prediction request failed");
                self.pending = None;
                self.error = Some(error);
            }
            Event::ErrorDismissed => {
                self.error = None;
            }
        }

        self
    }

    /// Validates the current selection into a request body.
    pub fn prepare_request(&self) -> Result<PredictionRequest> {
        Ok(self.selection.to_request()?)
    }

    pub fn is_predicting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn outlook(&self) -> Option<Outlook> {
        self.prediction
            .as_ref()
            .map(|prediction| Outlook::from_average(prediction.average))
    }

    /// A non-empty chart is always shown, even when the history failed.
    pub fn chart_display(&self) -> ChartDisplay<'_> {
        if !self.chart.is_empty() {
            let history_error = match &self.historical {
                HistoricalStatus::Failed(err) => Some(err),
                _ => None,
            };
            return ChartDisplay::Chart { history_error };
        }

        match &self.historical {
            HistoricalStatus::Loading => ChartDisplay::Loading,
            HistoricalStatus::Failed(err) => ChartDisplay::Failed(err),
            HistoricalStatus::Loaded(_) => ChartDisplay::Empty,
        }
    }

    fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest_ticket == Some(ticket)
    }

    fn recompute_chart(&mut self) {
        self.chart = chart_series(
            self.historical.points(),
            self.prediction.as_ref(),
            self.selection.target_year,
        );
    }
}

/// `(prior, event) -> next` without consuming the prior state.
pub fn transition(prior: &ControllerState, event: Event) -> ControllerState {
    prior.clone().apply(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::RequestSequencer;
    use crate::testing::{historical_fixture, prediction_with_average};
    use crate::chart::FALLBACK_LAST_YEAR;
    use common::MAX_TARGET_YEAR;

    fn loaded_state() -> ControllerState {
        ControllerState::default().apply(Event::HistoricalLoaded(historical_fixture()))
    }

    fn assert_chart_consistent(state: &ControllerState) {
        assert_eq!(
            state.chart,
            chart_series(
                state.historical.points(),
                state.prediction.as_ref(),
                state.selection.target_year
            )
        );
    }

    #[test]
    fn test_initial_state() {
        let state = ControllerState::default();
        assert!(state.historical.is_loading());
        assert!(state.chart.is_empty());
        assert_eq!(state.selection, Selection::new(2030, 6.5));
        assert_eq!(state.outlook(), None);
    }

    #[test]
    fn test_historical_loaded_initializes_chart_without_overlay() {
        let state = loaded_state();
        let historical = historical_fixture();

        assert_eq!(state.chart.len(), historical.len());
        assert!(state.chart.iter().all(|p| p.predicted_gdp_growth.is_none()));
        assert_chart_consistent(&state);
    }

    #[test]
    fn test_invalid_historical_series_is_rejected() {
        let points = vec![HistoricalPoint::new(2021, 1.0), HistoricalPoint::new(2020, 2.0)];
        let state = ControllerState::default().apply(Event::HistoricalLoaded(points));

        assert!(matches!(state.historical, HistoricalStatus::Failed(ControllerError::InvalidResponse(_))));
        assert!(state.chart.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_historical_failure_can_be_retried() {
        let failed = ControllerState::default()
            .apply(Event::HistoricalFailed(ControllerError::network("offline")));
        assert_eq!(failed.error, Some(ControllerError::network("offline")));

        let retrying = failed.apply(Event::HistoricalRequested);
        assert!(retrying.historical.is_loading());
        assert_eq!(retrying.error, None);
    }

    #[test]
    fn test_reload_after_success_is_ignored() {
        let state = loaded_state();
        let next = transition(&state, Event::HistoricalRequested);
        assert_eq!(next, state);
    }

    #[test]
    fn test_prediction_updates_result_and_chart_together() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: prediction_with_average(5.5),
            });

        assert_eq!(state.prediction, Some(prediction_with_average(5.5)));
        assert!(!state.is_predicting());
        assert_eq!(state.outlook(), Some(Outlook::Strong));
        // 2015..=2023 historical, 2024..=2030 projected
        assert_eq!(state.chart.len(), 9 + 7);
        assert_chart_consistent(&state);
    }

    #[test]
    fn test_year_change_recomputes_chart() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();
        let predicted = loaded_state()
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: prediction_with_average(2.0),
            });

        let state = predicted.apply(Event::YearChanged(2026));

        assert_eq!(state.selection.target_year, 2026);
        assert_eq!(state.chart.last().unwrap().year, 2026);
        assert_chart_consistent(&state);
    }

    #[test]
    fn test_huge_typed_year_keeps_chart_bounded() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();
        let predicted = loaded_state()
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: prediction_with_average(2.0),
            });

        let state = predicted.apply(Event::YearChanged(5_000_000));

        assert_eq!(state.chart.last().unwrap().year, MAX_TARGET_YEAR);
        assert!(matches!(state.prepare_request(), Err(ControllerError::ValidationFailure(_))));
    }

    #[test]
    fn test_history_with_overflowing_year_is_rejected() {
        let state = ControllerState::default()
            .apply(Event::HistoricalLoaded(vec![HistoricalPoint::new(i32::MAX, 1.0)]));

        assert!(matches!(state.historical, HistoricalStatus::Failed(ControllerError::InvalidResponse(_))));
        assert!(state.chart.is_empty());
    }

    #[test]
    fn test_chart_is_shown_after_history_failure_once_predicted() {
        let failure = ControllerError::network("HTTP error: 500");
        let failed = ControllerState::default().apply(Event::HistoricalFailed(failure.clone()));
        assert_eq!(failed.chart_display(), ChartDisplay::Failed(&failure));

        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();
        let predicted = failed
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: prediction_with_average(3.0),
            });

        assert_eq!(
            predicted.chart_display(),
            ChartDisplay::Chart {
                history_error: Some(&failure)
            }
        );
        assert_eq!(predicted.chart.first().unwrap().year, FALLBACK_LAST_YEAR + 1);
    }

    #[test]
    fn test_chart_display_while_loading_and_when_empty() {
        assert_eq!(ControllerState::default().chart_display(), ChartDisplay::Loading);

        let empty = ControllerState::default().apply(Event::HistoricalLoaded(Vec::new()));
        assert_eq!(empty.chart_display(), ChartDisplay::Empty);

        assert_eq!(
            loaded_state().chart_display(),
            ChartDisplay::Chart { history_error: None }
        );
    }

    #[test]
    fn test_inflation_change_leaves_chart_alone() {
        let state = loaded_state();
        let next = transition(&state, Event::InflationChanged(12.0));

        assert_eq!(next.selection.inflation_rate, 12.0);
        assert_eq!(next.chart, state.chart);
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_request() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(first))
            .apply(Event::PredictionRequested(second))
            .apply(Event::PredictionReceived {
                ticket: second,
                result: prediction_with_average(1.0),
            })
            // the older request resolves last
            .apply(Event::PredictionReceived {
                ticket: first,
                result: prediction_with_average(9.0),
            });

        assert_eq!(state.prediction, Some(prediction_with_average(1.0)));
        assert_chart_consistent(&state);
    }

    #[test]
    fn test_stale_response_does_not_clear_pending() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(first))
            .apply(Event::PredictionRequested(second))
            .apply(Event::PredictionReceived {
                ticket: first,
                result: prediction_with_average(9.0),
            });

        assert_eq!(state.prediction, None);
        assert_eq!(state.pending, Some(second));
    }

    #[test]
    fn test_out_of_order_request_event_is_ignored() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(second))
            .apply(Event::PredictionRequested(first));

        assert_eq!(state.latest_ticket, Some(second));
    }

    #[test]
    fn test_failure_keeps_previous_prediction_and_chart() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let predicted = loaded_state()
            .apply(Event::PredictionRequested(first))
            .apply(Event::PredictionReceived {
                ticket: first,
                result: prediction_with_average(3.0),
            });

        let second = sequencer.issue();
        let failed = predicted
            .clone()
            .apply(Event::PredictionRequested(second))
            .apply(Event::PredictionFailed {
                ticket: second,
                error: ControllerError::network("timed out"),
            });

        assert_eq!(failed.prediction, predicted.prediction);
        assert_eq!(failed.chart, predicted.chart);
        assert_eq!(failed.error, Some(ControllerError::network("timed out")));
        assert!(!failed.is_predicting());
    }

    #[test]
    fn test_malformed_prediction_is_not_applied() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: PredictionResult::new(1.0, f64::NAN, f64::NAN),
            });

        assert_eq!(state.prediction, None);
        assert!(matches!(state.error, Some(ControllerError::InvalidResponse(_))));
        assert!(state.chart.iter().all(|p| p.predicted_gdp_growth.is_none()));
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        let state = loaded_state()
            .apply(Event::PredictionRequested(first))
            .apply(Event::PredictionRequested(second))
            .apply(Event::PredictionFailed {
                ticket: first,
                error: ControllerError::network("aborted"),
            });

        assert_eq!(state.error, None);
        assert_eq!(state.pending, Some(second));
    }

    #[test]
    fn test_prepare_request_validates_selection() {
        let state = ControllerState::default().apply(Event::YearChanged(2100));
        assert!(matches!(state.prepare_request(), Err(ControllerError::ValidationFailure(_))));

        let state = state.apply(Event::YearChanged(2040));
        let request = state.prepare_request().unwrap();
        assert_eq!(request, PredictionRequest { year: 2040, inflation: 6.5 });
    }

    #[test]
    fn test_input_rejection_and_dismissal() {
        let state = loaded_state()
            .apply(Event::InputRejected(ControllerError::validation("'x' is not a whole year")));
        assert!(state.error.is_some());
        assert_eq!(state.selection, Selection::default());

        let state = state.apply(Event::ErrorDismissed);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_prediction_before_history_uses_fallback_year() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();

        let state = ControllerState::default()
            .apply(Event::YearChanged(2026))
            .apply(Event::PredictionRequested(ticket))
            .apply(Event::PredictionReceived {
                ticket,
                result: prediction_with_average(4.0),
            });

        let years: Vec<i32> = state.chart.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2025, 2026]);
    }
}
