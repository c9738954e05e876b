use common::PredictionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionCardsProps {
    pub prediction: PredictionResult,
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[function_component(PredictionCards)]
pub fn prediction_cards(props: &PredictionCardsProps) -> Html {
    let prediction = &props.prediction;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-secondary"><i class="fas fa-chart-bar text-2xl"></i></div>
                    <div class="stat-title">{"Linear Regression"}</div>
                    <div class="stat-value">{percent(prediction.linear_regression)}</div>
                    <div class="stat-desc">{"GDP Growth Rate"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-secondary"><i class="fas fa-tree text-2xl"></i></div>
                    <div class="stat-title">{"Random Forest"}</div>
                    <div class="stat-value">{percent(prediction.random_forest)}</div>
                    <div class="stat-desc">{"GDP Growth Rate"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100 border-2 border-primary">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class="fas fa-trophy text-2xl"></i></div>
                    <div class="stat-title">{"Average"}</div>
                    <div class="stat-value text-primary">{percent(prediction.average)}</div>
                    <div class="stat-desc">{"Final Prediction"}</div>
                </div>
            </div>
        </div>
    }
}
