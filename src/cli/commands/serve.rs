use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, load_settings};
use crate::router::create_router;

pub async fn serve(
    bind_address: Option<String>,
    backend_url: Option<String>,
    static_dir: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
) -> Result<()> {
    trace!("Entering serve function");
    info!("GDP predictor server starting up");

    let settings = load_settings()?.with_overrides(
        bind_address,
        backend_url,
        static_dir,
        request_timeout_secs,
    );
    debug!("Bind address: {}", settings.bind_address);
    debug!("Backend URL: {}", settings.backend_url);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&settings) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    if settings.static_dir.is_none() {
        info!("No static directory configured, serving the API only");
    }

    // Create router
    trace!("Creating application router");
    let app = create_router(state, settings.static_dir.clone());
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", settings.bind_address);
    let listener = match TcpListener::bind(&settings.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", settings.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", settings.bind_address, e);
            return Err(e.into());
        }
    };

    info!("GDP predictor running on http://{}", settings.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", settings.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
