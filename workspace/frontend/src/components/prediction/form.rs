use common::{Selection, MAX_INFLATION_RATE, MAX_TARGET_YEAR, MIN_INFLATION_RATE, MIN_TARGET_YEAR};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub selection: Selection,
    pub predicting: bool,
    pub on_year: Callback<String>,
    pub on_inflation: Callback<String>,
    pub on_predict: Callback<()>,
}

fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Year and inflation inputs with the predict button.
///
/// The min/max attributes only hint the valid ranges; the controller
/// rejects out-of-range values when the prediction is requested.
#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let on_year_change = {
        let on_year = props.on_year.clone();
        Callback::from(move |e: Event| on_year.emit(input_value(&e)))
    };

    let on_inflation_change = {
        let on_inflation = props.on_inflation.clone();
        Callback::from(move |e: Event| on_inflation.emit(input_value(&e)))
    };

    let on_submit = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Predict button clicked");
            on_predict.emit(());
        })
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h3 class="card-title">{"Economic Indicators"}</h3>
                <form onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Year"}</span></label>
                        <input
                            type="number"
                            name="year"
                            class="input input-bordered w-full"
                            value={props.selection.target_year.to_string()}
                            min={MIN_TARGET_YEAR.to_string()}
                            max={MAX_TARGET_YEAR.to_string()}
                            step="1"
                            onchange={on_year_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Inflation Rate (%)"}</span></label>
                        <input
                            type="number"
                            name="inflation"
                            class="input input-bordered w-full"
                            value={props.selection.inflation_rate.to_string()}
                            min={MIN_INFLATION_RATE.to_string()}
                            max={MAX_INFLATION_RATE.to_string()}
                            step="0.1"
                            onchange={on_inflation_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {if props.predicting {
                            html! { <span class="loading loading-spinner loading-sm"></span> }
                        } else {
                            html! { <i class="fas fa-magic"></i> }
                        }}
                        {" Predict GDP Growth"}
                    </button>
                </form>
            </div>
        </div>
    }
}
