use compute::ChartPoint;
use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

const CHART_DIV_ID: &str = "gdp-growth-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct GdpChartProps {
    pub points: Vec<ChartPoint>,
}

fn to_js<T: serde::Serialize>(value: &T) -> Option<JsValue> {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart data: {}", e);
            return None;
        }
    };

    match js_sys::JSON::parse(&json) {
        Ok(js) => Some(js),
        Err(e) => {
            log::error!("Failed to parse chart JSON: {:?}", e);
            None
        }
    }
}

/// Historical and predicted GDP growth as two Plotly lines.
///
/// Both traces share the year axis. A point without a value for a trace is
/// sent as `null`, which Plotly renders as a gap.
#[function_component(GdpChart)]
pub fn gdp_chart(props: &GdpChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.points.clone()), move |(container_ref, points)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            log::debug!("Rendering chart with {} points", points.len());

            let years: Vec<i32> = points.iter().map(|p| p.year).collect();
            let historical: Vec<Option<f64>> = points.iter().map(|p| p.gdp_growth).collect();
            let predicted: Vec<Option<f64>> = points.iter().map(|p| p.predicted_gdp_growth).collect();

            let historical_trace = Scatter::new(years.clone(), historical)
                .mode(Mode::LinesMarkers)
                .name("Historical")
                .connect_gaps(false)
                .line(Line::new().color("#FF6B35").width(3.0));

            let predicted_trace = Scatter::new(years, predicted)
                .mode(Mode::LinesMarkers)
                .name("Predicted")
                .connect_gaps(false)
                .line(Line::new().color("#4CAF50").width(3.0));

            let layout = Layout::new()
                .x_axis(Axis::new().title(Title::with_text("Year")))
                .y_axis(Axis::new().title(Title::with_text("GDP Growth (%)")))
                .height(400);

            if let (Some(historical_js), Some(predicted_js), Some(layout_js)) =
                (to_js(&historical_trace), to_js(&predicted_trace), to_js(&layout))
            {
                let data_js = js_sys::Array::new();
                data_js.push(&historical_js);
                data_js.push(&predicted_js);

                newPlot(CHART_DIV_ID, data_js.into(), layout_js);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
