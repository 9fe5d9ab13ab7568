//! Catalog - the data set the sitemaps are generated from.
//!
//! Turns static descriptors into generator records. Category records get
//! their derived fields (`tool_count`, `has_new_tools`) here.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::warn;

use super::definitions::{CategoryId, STATIC_PAGES, ToolDescriptor, ToolId};
use super::error::CatalogError;
use crate::domains::sitemap::{CategoryRecord, StaticPageRecord, ToolRecord};

/// Read-only source data for one deployment.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
    categories: Vec<CategoryId>,
    pages: Vec<String>,
}

impl Catalog {
    /// Create a catalog from explicit data.
    pub fn new(
        tools: Vec<ToolDescriptor>,
        categories: Vec<CategoryId>,
        pages: Vec<String>,
    ) -> Self {
        Self {
            tools,
            categories,
            pages,
        }
    }

    /// The compiled-in data set.
    pub fn builtin() -> Self {
        Self::new(
            ToolId::ALL.iter().map(|tool| tool.descriptor()).collect(),
            CategoryId::ALL.to_vec(),
            STATIC_PAGES.iter().map(|page| page.to_string()).collect(),
        )
    }

    /// An empty data set.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Look up a tool by slug.
    pub fn tool(&self, slug: &str) -> Result<&ToolDescriptor, CatalogError> {
        let id: ToolId = slug.parse()?;
        self.tools
            .iter()
            .find(|tool| tool.id == id)
            .ok_or_else(|| CatalogError::unknown_tool(slug))
    }

    /// Generator input for the tools sitemap.
    pub fn tool_records(&self) -> Vec<ToolRecord> {
        self.tools
            .iter()
            .map(|tool| ToolRecord {
                slug: tool.slug().to_string(),
                popularity: tool.popularity,
                is_new: tool.is_new,
                last_modified: tool.updated.and_then(|date| parse_updated(tool.slug(), date)),
            })
            .collect()
    }

    /// Generator input for the categories sitemap.
    pub fn category_records(&self) -> Vec<CategoryRecord> {
        self.categories
            .iter()
            .map(|&category| {
                let members = self.tools.iter().filter(|tool| tool.category == category);
                let (tool_count, has_new_tools) = members
                    .fold((0i64, false), |(count, new), tool| (count + 1, new || tool.is_new));

                CategoryRecord {
                    slug: category.slug().to_string(),
                    tool_count,
                    has_new_tools,
                }
            })
            .collect()
    }

    /// Generator input for the pages sitemap.
    pub fn page_records(&self) -> Vec<StaticPageRecord> {
        self.pages
            .iter()
            .map(|path| StaticPageRecord::new(path.clone()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Midnight UTC of a `YYYY-MM-DD` date; bad dates are logged and ignored.
fn parse_updated(slug: &str, date: &str) -> Option<DateTime<Utc>> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight)),
        Err(e) => {
            warn!("Ignoring invalid update date {:?} for tool {}: {}", date, slug, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: ToolId, category: CategoryId, is_new: bool) -> ToolDescriptor {
        ToolDescriptor {
            is_new,
            category,
            ..id.descriptor()
        }
    }

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tools().len(), ToolId::ALL.len());
        assert_eq!(catalog.categories().len(), CategoryId::ALL.len());
        assert!(catalog.pages().iter().any(|p| p == "/"));
    }

    #[test]
    fn test_tool_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tool("base64").unwrap().id, ToolId::Base64);
        assert!(catalog.tool("nope").is_err());

        let partial = Catalog::new(vec![ToolId::Base64.descriptor()], Vec::new(), Vec::new());
        assert!(matches!(
            partial.tool("json-formatter"),
            Err(CatalogError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_category_records_derive_counts() {
        let catalog = Catalog::new(
            vec![
                descriptor(ToolId::Base64, CategoryId::DeveloperTools, false),
                descriptor(ToolId::JwtDecoder, CategoryId::DeveloperTools, true),
                descriptor(ToolId::WordCounter, CategoryId::TextTools, false),
            ],
            vec![CategoryId::DeveloperTools, CategoryId::TextTools, CategoryId::Lookups],
            Vec::new(),
        );

        let records = catalog.category_records();

        assert_eq!(
            records,
            vec![
                CategoryRecord {
                    slug: "developer-tools".to_string(),
                    tool_count: 2,
                    has_new_tools: true,
                },
                CategoryRecord {
                    slug: "text-tools".to_string(),
                    tool_count: 1,
                    has_new_tools: false,
                },
                CategoryRecord {
                    slug: "lookups".to_string(),
                    tool_count: 0,
                    has_new_tools: false,
                },
            ]
        );
    }

    #[test]
    fn test_tool_records_parse_update_dates() {
        let mut bad = ToolId::Base64.descriptor();
        bad.updated = Some("yesterday");
        let mut good = ToolId::JsonFormatter.descriptor();
        good.updated = Some("2026-05-10");

        let records = Catalog::new(vec![bad, good], Vec::new(), Vec::new()).tool_records();

        assert_eq!(records[0].last_modified, None);
        assert_eq!(
            records[1].last_modified,
            Some(Utc.with_ymd_and_hms(2026, 5, 10, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_empty_catalog_yields_no_records() {
        let catalog = Catalog::empty();
        assert!(catalog.tool_records().is_empty());
        assert!(catalog.category_records().is_empty());
        assert!(catalog.page_records().is_empty());
    }
}
