use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "gdp_predictor_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend origin (e.g., "http://localhost:5000"); `None` means same origin
    pub api_origin: Option<String>,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: None,
            api_path: "/api".to_string(),
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
            };

            if let Some(origin) = read("api_origin") {
                settings.api_origin = Some(origin.trim_end_matches('/').to_string());
            }

            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }

            if let Some(log_level) = read("log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Some(timeout) = read("request_timeout_ms") {
                if let Ok(timeout_val) = timeout.parse::<u32>() {
                    settings.request_timeout_ms = timeout_val;
                }
            }

            if let Some(duration) = read("toast_duration_ms") {
                if let Ok(duration_val) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration_val;
                }
            }
        }

        settings
    }

    /// Get the base API URL (origin + path prefix)
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin.as_deref().unwrap_or(""), self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
