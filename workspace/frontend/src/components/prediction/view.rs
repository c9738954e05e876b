use compute::ChartDisplay;
use yew::prelude::*;

use super::banner::OutlookBanner;
use super::cards::PredictionCards;
use super::chart::GdpChart;
use super::form::PredictionForm;
use crate::common::error::{ErrorAlert, ErrorDisplay};
use crate::common::loading::Loading;
use crate::hooks::use_prediction_controller;

#[function_component(PredictionView)]
pub fn prediction_view() -> Html {
    let controller = use_prediction_controller();
    let state = &*controller.state;

    let chart_section = match state.chart_display() {
        ChartDisplay::Loading => html! {
            <Loading text={Some("Loading chart...".to_string())} />
        },
        ChartDisplay::Failed(err) => html! {
            <ErrorDisplay
                message={err.to_string()}
                on_retry={Some(controller.reload_historical.clone())}
            />
        },
        ChartDisplay::Empty => html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                <p>{"No historical data available."}</p>
            </div>
        },
        ChartDisplay::Chart { history_error } => html! {
            <>
                {if let Some(err) = history_error {
                    html! {
                        <ErrorDisplay
                            message={format!("Historical data unavailable, showing projection only: {}", err)}
                            on_retry={Some(controller.reload_historical.clone())}
                        />
                    }
                } else {
                    html! {}
                }}
                <GdpChart points={state.chart.clone()} />
            </>
        },
    };

    html! {
        <>
            {if let Some(error) = &state.error {
                html! {
                    <ErrorAlert error={error.clone()} on_dismiss={controller.dismiss_error.clone()} />
                }
            } else {
                html! {}
            }}

            <PredictionForm
                selection={state.selection}
                predicting={state.is_predicting()}
                on_year={controller.set_year.clone()}
                on_inflation={controller.set_inflation.clone()}
                on_predict={controller.predict.clone()}
            />

            {if let Some(prediction) = &state.prediction {
                html! {
                    <>
                        <PredictionCards prediction={prediction.clone()} />
                        {if let Some(outlook) = state.outlook() {
                            html! { <OutlookBanner {outlook} /> }
                        } else {
                            html! {}
                        }}
                    </>
                }
            } else {
                html! {}
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Historical & Predicted GDP Growth"}</h3>
                    {chart_section}
                </div>
            </div>
        </>
    }
}
