//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::parse_env;

#[cfg(feature = "stdio")]
use crate::domains::sitemap::SitemapDocument;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Serve the sitemap documents over HTTP.
    #[cfg(feature = "http")]
    Http(HttpConfig),

    /// Write a single rendered document to standard output.
    #[cfg(feature = "stdio")]
    Stdio(StdioConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

/// STDIO transport configuration.
#[cfg(feature = "stdio")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdioConfig {
    /// Document written to stdout.
    #[serde(default = "default_document")]
    pub document: SitemapDocument,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "stdio")]
fn default_document() -> SitemapDocument {
    SitemapDocument::Index
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio(StdioConfig::default());
        }

        #[cfg(not(any(feature = "http", feature = "stdio")))]
        {
            compile_error!("At least one transport feature must be enabled: http or stdio");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "stdio")]
impl Default for StdioConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `SITEMAP_HTTP_PORT`, `SITEMAP_HTTP_HOST` and `SITEMAP_HTTP_CORS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = parse_env::<u16>("SITEMAP_HTTP_PORT").unwrap_or(defaults.port);
        let host = std::env::var("SITEMAP_HTTP_HOST").unwrap_or(defaults.host);
        let enable_cors = match std::env::var("SITEMAP_HTTP_CORS") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "Ignoring SITEMAP_HTTP_CORS={:?}: expected true/false/1/0",
                    raw
                );
                defaults.enable_cors
            }),
            Err(_) => defaults.enable_cors,
        };

        Self {
            port,
            host,
            enable_cors,
        }
    }
}

#[cfg(feature = "stdio")]
impl StdioConfig {
    /// Read `SITEMAP_DOCUMENT`, falling back to the sitemap index.
    pub fn from_env() -> Self {
        Self {
            document: parse_env("SITEMAP_DOCUMENT").unwrap_or_else(default_document),
        }
    }
}

#[cfg(feature = "http")]
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl TransportConfig {
    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio(document: SitemapDocument) -> Self {
        Self::Stdio(StdioConfig { document })
    }

    /// Load transport config from environment variables.
    ///
    /// `SITEMAP_TRANSPORT` selects the transport; when it is unset, or names
    /// a transport this build does not include, the first enabled one is used.
    pub fn from_env() -> Self {
        let transport = std::env::var("SITEMAP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio(StdioConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            "" => Self::first_enabled_from_env(),
            other => {
                let fallback = Self::first_enabled_from_env();
                warn!(
                    "Ignoring SITEMAP_TRANSPORT={:?}: not a transport in this build; using {}",
                    other,
                    fallback.description()
                );
                fallback
            }
        }
    }

    fn first_enabled_from_env() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::from_env());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio(StdioConfig::from_env());
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "stdio")]
            Self::Stdio(cfg) => format!("STDIO ({} document)", cfg.document),
        }
    }
}
