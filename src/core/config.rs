//! Configuration management for the sitemap server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::sitemap::{ChangeFrequency, SitemapConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

/// Main configuration structure for the sitemap server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Sitemap generation settings shared by every request.
    pub sitemap: SitemapConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the service.
    pub name: String,

    /// The version of the service.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,

    /// Log a stats summary for every rendered sitemap.
    pub log_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolkit-sitemaps".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            sitemap: SitemapConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
                log_stats: false,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `SITEMAP_`.
    /// For example: `SITEMAP_BASE_URL`, `SITEMAP_LOG_LEVEL`.
    /// Values that fail to parse are reported and the default is kept.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("SITEMAP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("SITEMAP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(with_timestamps) = parse_env::<bool>("SITEMAP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        if let Some(log_stats) = parse_env::<bool>("SITEMAP_LOG_STATS") {
            config.logging.log_stats = log_stats;
        }

        let mut base_url = config.sitemap.base_url.clone();
        let mut change_frequency = config.sitemap.default_change_frequency;
        let mut priority = config.sitemap.default_priority;

        if let Ok(url) = std::env::var("SITEMAP_BASE_URL") {
            info!("Sitemap base URL set to {}", url);
            base_url = url;
        }

        if let Some(freq) = parse_env::<ChangeFrequency>("SITEMAP_DEFAULT_CHANGEFREQ") {
            change_frequency = freq;
        }

        if let Some(p) = parse_env::<f64>("SITEMAP_DEFAULT_PRIORITY") {
            priority = p;
        }

        config.sitemap = SitemapConfig::new(base_url, change_frequency, priority);

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Check the values that cannot be repaired at request time.
    pub fn validate(&self) -> Result<()> {
        let base = &self.sitemap.base_url;
        if base.chars().any(char::is_whitespace) {
            return Err(Error::config(format!(
                "base URL {base:?} must not contain whitespace"
            )));
        }

        let parsed = Url::parse(base)
            .map_err(|e| Error::config(format!("base URL {base:?} is not absolute: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(Error::config(format!(
                "base URL {base:?} must be an http(s) origin"
            )));
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::config(format!(
                "base URL {base:?} must not carry a query or fragment"
            )));
        }

        let priority = self.sitemap.default_priority;
        if !(0.0..=1.0).contains(&priority) {
            return Err(Error::config(format!(
                "default priority {priority} is outside [0, 1]"
            )));
        }

        Ok(())
    }
}

/// Read and parse an environment variable, warning on bad values.
pub(crate) fn parse_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
