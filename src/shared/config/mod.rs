//! Application configuration module
//!
//! Provides configuration types for the application.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Monitoring ingest endpoint (crash reporting)
    pub monitoring_endpoint: Option<String>,
    /// Fraction of error events reported to monitoring (0.0 - 1.0)
    pub monitoring_sample_rate: Option<f32>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(rate) = self.monitoring_sample_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidValue("monitoring_sample_rate"));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    monitoring_endpoint: Option<String>,
    monitoring_sample_rate: Option<f32>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the monitoring ingest endpoint
    pub fn monitoring_endpoint(mut self, endpoint: String) -> Self {
        self.monitoring_endpoint = Some(endpoint);
        self
    }

    /// Set the monitoring sample rate
    pub fn monitoring_sample_rate(mut self, rate: f32) -> Self {
        self.monitoring_sample_rate = Some(rate);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            monitoring_endpoint: self.monitoring_endpoint,
            monitoring_sample_rate: self.monitoring_sample_rate,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert!(config.server_url.is_none());
        assert!(config.monitoring_endpoint.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .server_url("http://127.0.0.1:3000".to_string())
            .monitoring_sample_rate(0.5)
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://127.0.0.1:3000"));
        assert_eq!(config.monitoring_sample_rate, Some(0.5));
    }

    #[test]
    fn test_sample_rate_out_of_range_rejected() {
        let result = AppConfig::builder().monitoring_sample_rate(1.5).build();
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
