//! Sitemap server handle.
//!
//! `SitemapServer` is the explicit context object handed to every transport.
//! It is built once at startup from `Config` and cloned cheaply into
//! request handlers; it holds no mutable state.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::catalog::Catalog;
use crate::domains::sitemap::{SitemapDocument, SitemapService};

/// The main server handle.
#[derive(Clone)]
pub struct SitemapServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for rendering sitemap documents.
    sitemap_service: Arc<SitemapService>,
}

impl SitemapServer {
    /// Create a new server over the built-in catalog.
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Create a new server over an explicit catalog.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let config = Arc::new(config);

        let sitemap_service = Arc::new(
            SitemapService::new(config.sitemap.clone(), catalog)
                .with_stats_logging(config.logging.log_stats),
        );

        info!("Sitemap server ready for {}", config.sitemap.base_url);

        Self {
            config,
            sitemap_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the catalog the sitemaps are generated from.
    pub fn catalog(&self) -> &Catalog {
        self.sitemap_service.catalog()
    }

    /// Render a sitemap document.
    pub fn render(&self, document: SitemapDocument) -> Result<String> {
        Ok(self.sitemap_service.render(document)?)
    }

    /// Render `robots.txt`.
    pub fn robots(&self) -> String {
        self.sitemap_service.robots()
    }
}
