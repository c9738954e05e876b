use anyhow::Result;
use config::{Config, Environment, File};
use moka::future::Cache;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;
use crate::upstream::UpstreamClient;

/// Server settings.
///
/// Resolved from built-in defaults, an optional `gdp-predictor.toml` in the
/// working directory, then `GDP_PREDICTOR_*` environment variables. CLI flags
/// are applied last with [`Settings::with_overrides`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    pub backend_url: String,
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            backend_url: "http://localhost:5000".to_string(),
            static_dir: None,
            request_timeout_secs: 30,
            cache_ttl_secs: 300,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Replaces every setting for which a value was given on the command line.
    pub fn with_overrides(
        mut self,
        bind_address: Option<String>,
        backend_url: Option<String>,
        static_dir: Option<PathBuf>,
        request_timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(backend_url) = backend_url {
            self.backend_url = backend_url;
        }
        if static_dir.is_some() {
            self.static_dir = static_dir;
        }
        if let Some(secs) = request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }
}

/// Load layered settings
pub fn load_settings() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let defaults = Settings::default();
    let settings: Settings = Config::builder()
        .set_default("bind_address", defaults.bind_address)?
        .set_default("backend_url", defaults.backend_url)?
        .set_default("request_timeout_secs", defaults.request_timeout_secs)?
        .set_default("cache_ttl_secs", defaults.cache_ttl_secs)?
        .add_source(File::with_name("gdp-predictor").required(false))
        .add_source(Environment::with_prefix("GDP_PREDICTOR"))
        .build()?
        .try_deserialize()?;

    debug!(?settings, "Settings loaded");
    Ok(settings)
}

/// Initialize application state from resolved settings
pub fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    info!("Using prediction backend at {}", settings.backend_url);
    let upstream = UpstreamClient::new(&settings.backend_url, settings.request_timeout())?;

    let cache = Cache::builder()
        .max_capacity(100)
        .time_to_live(settings.cache_ttl())
        .build();

    Ok(AppState { upstream, cache })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let settings = Settings::default().with_overrides(
            None,
            Some("http://backend:8000".to_string()),
            Some(PathBuf::from("dist")),
            None,
        );

        assert_eq!(settings.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.backend_url, "http://backend:8000");
        assert_eq!(settings.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_missing_static_dir_does_not_clear_configured_one() {
        let settings = Settings {
            static_dir: Some(PathBuf::from("/srv/app")),
            ..Settings::default()
        }
        .with_overrides(None, None, None, Some(5));

        assert_eq!(settings.static_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_initialize_app_state_trims_backend_url() {
        let settings = Settings {
            backend_url: "http://localhost:5000/".to_string(),
            ..Settings::default()
        };

        let state = initialize_app_state(&settings).unwrap();
        assert_eq!(state.upstream.base_url(), "http://localhost:5000");
    }
}
