use crate::handlers::{
    health::health_check, historical::get_historical, prediction::predict,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::debug;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
///
/// When `static_dir` is given, unknown paths are served from the compiled
/// frontend bundle, falling back to its `index.html`.
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Proxied backend routes
        .route("/api/historical", get(get_historical))
        .route("/api/predict", post(predict))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let router = match static_dir {
        Some(dir) => {
            debug!("Serving frontend bundle from {}", dir.display());
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
