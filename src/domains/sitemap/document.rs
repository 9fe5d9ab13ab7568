//! Sitemap documents and the per-document pipeline.
//!
//! Each child document runs the same two stages: one generator call per
//! source record, then a single cleaning pass. Records that cannot be
//! turned into an entry are skipped and counted; they never fail the
//! document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::entry::{CategoryRecord, SitemapConfig, SitemapEntry, StaticPageRecord, ToolRecord};
use super::error::SitemapError;
use super::generator::{category_entry, page_entry, tool_entry};
use super::validator::clean_entries;
use crate::domains::catalog::Catalog;

/// A sitemap document served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapDocument {
    /// `<sitemapindex>` referencing the three child documents.
    Index,
    Pages,
    Categories,
    Tools,
}

impl SitemapDocument {
    /// Child documents, in the order the index lists them.
    pub const CHILDREN: [SitemapDocument; 3] = [Self::Pages, Self::Categories, Self::Tools];

    /// Request path of this document.
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/sitemap.xml",
            Self::Pages => "/sitemap-pages.xml",
            Self::Categories => "/sitemap-categories.xml",
            Self::Tools => "/sitemap-tools.xml",
        }
    }

    /// Short name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Pages => "pages",
            Self::Categories => "categories",
            Self::Tools => "tools",
        }
    }

    /// Absolute URL of this document.
    pub fn location(self, config: &SitemapConfig) -> String {
        format!("{}{}", config.base_url, self.path())
    }
}

impl fmt::Display for SitemapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SitemapDocument {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "index" | "sitemap" => Ok(Self::Index),
            "pages" => Ok(Self::Pages),
            "categories" => Ok(Self::Categories),
            "tools" => Ok(Self::Tools),
            _ => Err(SitemapError::unknown_document(s)),
        }
    }
}

/// Output of the pipeline for one child document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapBuild {
    /// Cleaned entries, in source order.
    pub entries: Vec<SitemapEntry>,
    /// Records the generator rejected.
    pub skipped: usize,
}

/// Run the pipeline for a child document over `catalog`.
///
/// The index has no entries of its own and yields an empty build.
pub fn build_entries(
    document: SitemapDocument,
    catalog: &Catalog,
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> SitemapBuild {
    match document {
        SitemapDocument::Index => SitemapBuild::default(),
        SitemapDocument::Pages => build_page_entries(&catalog.page_records(), config, now),
        SitemapDocument::Categories => {
            build_category_entries(&catalog.category_records(), config, now)
        }
        SitemapDocument::Tools => build_tool_entries(&catalog.tool_records(), config, now),
    }
}

pub fn build_tool_entries(
    records: &[ToolRecord],
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> SitemapBuild {
    run(records, |record| tool_entry(record, config, now), config)
}

pub fn build_category_entries(
    records: &[CategoryRecord],
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> SitemapBuild {
    run(records, |record| category_entry(record, config, now), config)
}

pub fn build_page_entries(
    records: &[StaticPageRecord],
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> SitemapBuild {
    run(records, |record| page_entry(record, config, now), config)
}

fn run<R, F>(records: &[R], generate: F, config: &SitemapConfig) -> SitemapBuild
where
    R: fmt::Debug,
    F: Fn(&R) -> Result<SitemapEntry, SitemapError>,
{
    let mut skipped = 0;
    let mut raw = Vec::with_capacity(records.len());

    for record in records {
        match generate(record) {
            Ok(entry) => raw.push(entry),
            Err(e) => {
                warn!("Skipping sitemap record {:?}: {}", record, e);
                skipped += 1;
            }
        }
    }

    SitemapBuild {
        entries: clean_entries(raw, config),
        skipped,
    }
}
