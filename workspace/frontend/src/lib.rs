use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use crate::components::layout::layout::Layout;
use crate::components::prediction::PredictionView;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Layout
                title="Sri Lanka Economy Predictor"
                subtitle={Some("Predict GDP Growth using Machine Learning".to_string())}
            >
                <PredictionView />
            </Layout>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== GDP Predictor Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
