//! Sitemap service implementation.
//!
//! The SitemapService renders documents on demand. Nothing is cached:
//! every call regenerates entries from the catalog and discards them once
//! serialized.

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::document::{SitemapDocument, build_entries};
use super::entry::SitemapConfig;
use super::error::SitemapError;
use super::robots::render_robots;
use super::stats::summarize;
use super::xml::{render_index, render_urlset};
use crate::domains::catalog::Catalog;

/// Service for rendering sitemap documents.
#[derive(Debug, Clone)]
pub struct SitemapService {
    config: SitemapConfig,
    catalog: Catalog,
    log_stats: bool,
}

impl SitemapService {
    /// Create a new SitemapService.
    pub fn new(config: SitemapConfig, catalog: Catalog) -> Self {
        info!(
            "Initializing SitemapService for {} ({} tools, {} categories, {} pages)",
            config.base_url,
            catalog.tools().len(),
            catalog.categories().len(),
            catalog.pages().len()
        );

        Self {
            config,
            catalog,
            log_stats: false,
        }
    }

    /// Log a `StatsSummary` for every rendered child document.
    pub fn with_stats_logging(mut self, enabled: bool) -> Self {
        self.log_stats = enabled;
        self
    }

    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render one document as XML.
    #[instrument(skip_all, fields(document = %document))]
    pub fn render(&self, document: SitemapDocument) -> Result<String, SitemapError> {
        let now = Utc::now();

        if document == SitemapDocument::Index {
            let locations: Vec<String> = SitemapDocument::CHILDREN
                .iter()
                .map(|child| child.location(&self.config))
                .collect();
            return render_index(&locations, now);
        }

        let build = build_entries(document, &self.catalog, &self.config, now);
        debug!(
            "Built {} entries ({} records skipped)",
            build.entries.len(),
            build.skipped
        );

        if self.log_stats {
            let stats = summarize(&build.entries);
            info!(
                total = stats.total,
                min_priority = ?stats.min_priority,
                max_priority = ?stats.max_priority,
                mean_priority = ?stats.mean_priority,
                by_change_frequency = ?stats.by_change_frequency,
                "Sitemap stats"
            );
        }

        render_urlset(&build.entries)
    }

    /// Render `robots.txt`.
    pub fn robots(&self) -> String {
        render_robots(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::ToolId;

    fn service() -> SitemapService {
        SitemapService::new(SitemapConfig::default(), Catalog::builtin())
    }

    #[test]
    fn test_render_tools_document() {
        let xml = service().render(SitemapDocument::Tools).unwrap();
        assert_eq!(xml.matches("<url>").count(), ToolId::ALL.len());
        assert!(xml.contains("<loc>https://www.indiatoolkit.in/tool/json-formatter</loc>"));
    }

    #[test]
    fn test_render_index_lists_children() {
        let xml = service().render(SitemapDocument::Index).unwrap();
        for child in SitemapDocument::CHILDREN {
            assert!(xml.contains(&format!(
                "<loc>https://www.indiatoolkit.in{}</loc>",
                child.path()
            )));
        }
    }

    #[test]
    fn test_stats_logging_does_not_change_output() {
        let quiet = service();
        let chatty = service().with_stats_logging(true);

        let a = quiet.render(SitemapDocument::Categories).unwrap();
        let b = chatty.render(SitemapDocument::Categories).unwrap();

        // lastmod carries the render time; compare everything else
        let strip = |xml: &str| {
            xml.lines()
                .filter(|line| !line.contains("<lastmod>"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&a), strip(&b));
    }

    #[test]
    fn test_empty_catalog_renders_empty_urlset() {
        let service = SitemapService::new(SitemapConfig::default(), Catalog::empty());
        let xml = service.render(SitemapDocument::Pages).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_robots() {
        assert!(service().robots().contains("Sitemap: https://www.indiatoolkit.in/sitemap.xml"));
    }
}
