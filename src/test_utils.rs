use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;
use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use common::PredictionRequest;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Address nothing listens on.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

/// Years the stub backend treats specially.
pub const FAILING_YEAR: i32 = 2049;
pub const MALFORMED_YEAR: i32 = 2048;
pub const SLOW_YEAR: i32 = 2047;

/// How long the stub takes to answer `SLOW_YEAR`.
const SLOW_RESPONSE: Duration = Duration::from_secs(3);

/// A prediction backend running on a random local port.
pub struct StubBackend {
    pub url: String,
    historical_hits: Arc<AtomicUsize>,
}

impl StubBackend {
    /// Number of times `/api/historical` was requested.
    pub fn historical_hits(&self) -> usize {
        self.historical_hits.load(Ordering::SeqCst)
    }
}

async fn stub_historical(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!([
        {"Year": 2021, "GDP Growth": 4.21},
        {"Year": 2022, "GDP Growth": -7.35},
        {"Year": 2023, "GDP Growth": -2.3},
    ]))
}

async fn stub_predict(Json(request): Json<PredictionRequest>) -> (StatusCode, Json<Value>) {
    if request.year == SLOW_YEAR {
        tokio::time::sleep(SLOW_RESPONSE).await;
    }

    match request.year {
        FAILING_YEAR => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "model failure"})),
        ),
        MALFORMED_YEAR => (StatusCode::OK, Json(json!({"lr_prediction": 1.0}))),
        _ => (
            StatusCode::OK,
            Json(json!({
                "lr_prediction": 3.5,
                "rf_prediction": 4.5,
                "avg_prediction": 4.0,
            })),
        ),
    }
}

/// Start a stub prediction backend
pub async fn spawn_stub_backend() -> StubBackend {
    let historical_hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .route("/api/historical", get(stub_historical))
        .route("/api/predict", post(stub_predict))
        .with_state(historical_hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub backend crashed");
    });

    StubBackend {
        url: format!("http://{}", addr),
        historical_hits,
    }
}

/// Initialize tracing for tests with output captured by the test harness.
///
/// The filter comes from RUST_LOG and defaults to `warn`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Create axum app for testing against the given backend
pub fn setup_test_app(backend_url: &str) -> Router {
    setup_test_app_with_timeout(backend_url, 5)
}

/// Same as [`setup_test_app`] with a custom backend timeout
pub fn setup_test_app_with_timeout(backend_url: &str, request_timeout_secs: u64) -> Router {
    init_test_tracing();

    let settings = Settings {
        backend_url: backend_url.to_string(),
        request_timeout_secs,
        ..Settings::default()
    };
    let state = initialize_app_state(&settings).expect("Failed to initialize test state");
    create_router(state, None)
}
