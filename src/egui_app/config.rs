use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::shared::config::{AppConfig, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default monitoring sample rate
const DEFAULT_SAMPLE_RATE: f32 = 1.0;

/// On-disk configuration file shape (`~/.config/xfpay/config.toml`)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    server_url: Option<String>,
    monitoring_endpoint: Option<String>,
    monitoring_sample_rate: Option<f32>,
}

/// Application configuration wrapper.
///
/// Values are resolved in order: environment variables, the optional
/// config file, built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let file = default_config_path()
            .map(|path| load_file_config(&path))
            .unwrap_or_default();

        let server_url = std::env::var("CLIENT_API_URL")
            .ok()
            .or(file.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let monitoring_endpoint = std::env::var("XFPAY_MONITORING_URL")
            .ok()
            .or(file.monitoring_endpoint);

        let monitoring_sample_rate = std::env::var("XFPAY_MONITORING_SAMPLE_RATE")
            .ok()
            .and_then(|raw| raw.parse::<f32>().ok())
            .or(file.monitoring_sample_rate)
            .unwrap_or(DEFAULT_SAMPLE_RATE);

        let mut builder = AppConfig::builder()
            .server_url(server_url)
            .monitoring_sample_rate(monitoring_sample_rate);
        if let Some(endpoint) = monitoring_endpoint {
            builder = builder.monitoring_endpoint(endpoint);
        }

        let app = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration, using defaults: {}", e);
            AppConfig::default()
        });

        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from an explicit config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = load_file_config(path);

        let mut builder = AppConfig::builder()
            .server_url(file.server_url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()))
            .monitoring_sample_rate(file.monitoring_sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE));
        if let Some(endpoint) = file.monitoring_endpoint {
            builder = builder.monitoring_endpoint(endpoint);
        }

        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Monitoring ingest endpoint, if configured
    pub fn monitoring_endpoint(&self) -> Option<&str> {
        self.app.monitoring_endpoint.as_deref()
    }

    /// Monitoring sample rate
    pub fn monitoring_sample_rate(&self) -> f32 {
        self.app.monitoring_sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }
}

/// Location of the user config file
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xfpay").join("config.toml"))
}

/// Load a config file, tolerating absence and parse failures
fn load_file_config(path: &Path) -> FileConfig {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return FileConfig::default();
    };

    match toml::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_api_url_join() {
        let config = Config::from_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(
            config.api_url("/api/payments"),
            format!("{}/api/payments", config.server_url())
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server_url = \"http://localhost:4000\"\nmonitoring_sample_rate = 0.25"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server_url(), "http://localhost:4000");
        assert_eq!(config.monitoring_sample_rate(), 0.25);
        assert!(config.monitoring_endpoint().is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::from_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.monitoring_sample_rate(), DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn test_invalid_sample_rate_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "monitoring_sample_rate = 3.0").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
