use std::ops::Deref;
use std::rc::Rc;

use compute::validation::{parse_inflation, parse_year};
use compute::{ControllerState, Event, RequestSequencer, RequestTicket};
use yew::prelude::*;

use crate::api_client::historical::get_historical;
use crate::api_client::prediction::request_prediction;
use crate::api_client::RequestHandle;
use crate::common::toast::ToastContext;

/// `ControllerState` adapted to `use_reducer`.
#[derive(Clone, PartialEq, Default)]
pub struct ViewState(ControllerState);

impl Deref for ViewState {
    type Target = ControllerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for ViewState {
    type Action = Event;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ViewState(self.0.clone().apply(action)))
    }
}

/// State handle plus the user actions of the prediction view.
#[derive(Clone)]
pub struct PredictionController {
    pub state: UseReducerHandle<ViewState>,
    pub set_year: Callback<String>,
    pub set_inflation: Callback<String>,
    pub predict: Callback<()>,
    pub reload_historical: Callback<()>,
    pub dismiss_error: Callback<()>,
}

/// Owns the prediction view state and runs its network side effects.
///
/// The historical series is fetched on mount. Each prediction gets a fresh
/// ticket; starting one aborts the previous in-flight request, and the
/// reducer drops any result that does not carry the latest ticket.
#[hook]
pub fn use_prediction_controller() -> PredictionController {
    let state = use_reducer(ViewState::default);
    let sequencer = use_mut_ref(RequestSequencer::new);
    let in_flight = use_mut_ref(|| None::<(RequestTicket, RequestHandle)>);
    let toast_ctx = use_context::<ToastContext>();

    let reload_historical = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| {
            let dispatcher = dispatcher.clone();
            dispatcher.dispatch(Event::HistoricalRequested);

            let handle = match RequestHandle::new() {
                Ok(handle) => handle,
                Err(err) => {
                    dispatcher.dispatch(Event::HistoricalFailed(err));
                    return;
                }
            };

            wasm_bindgen_futures::spawn_local(async move {
                match get_historical(&handle).await {
                    Ok(points) => dispatcher.dispatch(Event::HistoricalLoaded(points)),
                    Err(err) => dispatcher.dispatch(Event::HistoricalFailed(err)),
                }
            });
        })
    };

    // Fetch on mount
    {
        let reload_historical = reload_historical.clone();
        use_effect_with((), move |_| {
            reload_historical.emit(());
            || ()
        });
    }

    // Every new error also goes to a toast
    {
        let toast_ctx = toast_ctx.clone();
        use_effect_with(state.error.clone(), move |error| {
            if let (Some(error), Some(toast_ctx)) = (error, toast_ctx) {
                toast_ctx.show_error(error.to_string());
            }
            || ()
        });
    }

    let set_year = {
        let dispatcher = state.dispatcher();
        Callback::from(move |input: String| match parse_year(&input) {
            Ok(year) => dispatcher.dispatch(Event::YearChanged(year)),
            Err(err) => dispatcher.dispatch(Event::InputRejected(err)),
        })
    };

    let set_inflation = {
        let dispatcher = state.dispatcher();
        Callback::from(move |input: String| match parse_inflation(&input) {
            Ok(rate) => dispatcher.dispatch(Event::InflationChanged(rate)),
            Err(err) => dispatcher.dispatch(Event::InputRejected(err)),
        })
    };

    let predict = {
        let state = state.clone();
        let sequencer = sequencer.clone();
        let in_flight = in_flight.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: ()| {
            let request = match state.prepare_request() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Prediction not requested: {}", err);
                    state.dispatch(Event::InputRejected(err));
                    return;
                }
            };

            let ticket = sequencer.borrow_mut().issue();
            state.dispatch(Event::PredictionRequested(ticket));

            let handle = match RequestHandle::new() {
                Ok(handle) => handle,
                Err(error) => {
                    state.dispatch(Event::PredictionFailed { ticket, error });
                    return;
                }
            };

            if let Some((previous, previous_handle)) = in_flight.borrow_mut().replace((ticket, handle.clone())) {
                log::debug!("Request {} superseded by {}, aborting", previous, ticket);
                previous_handle.abort();
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_info("Previous prediction request cancelled".to_string());
                }
            }

            let dispatcher = state.dispatcher();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = request_prediction(&request, &handle).await;

                {
                    let mut slot = in_flight.borrow_mut();
                    if slot.as_ref().is_some_and(|(current, _)| *current == ticket) {
                        *slot = None;
                    }
                }

                match result {
                    Ok(result) => dispatcher.dispatch(Event::PredictionReceived { ticket, result }),
                    Err(error) => dispatcher.dispatch(Event::PredictionFailed { ticket, error }),
                }
            });
        })
    };

    let dismiss_error = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Event::ErrorDismissed))
    };

    PredictionController {
        state,
        set_year,
        set_inflation,
        predict,
        reload_historical,
        dismiss_error,
    }
}
