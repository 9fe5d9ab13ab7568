//! Sitemap entry types shared by every pipeline stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SitemapError;

/// How often a page is expected to change, as hinted to crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Every value, most frequent first.
    pub const ALL: [ChangeFrequency; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// The value as written in `<changefreq>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == wanted)
            .ok_or_else(|| SitemapError::invalid_change_frequency(s))
    }
}

/// Settings shared by every stage of one sitemap request.
///
/// Built once from [`crate::core::Config`] and only ever borrowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Absolute origin, stored without a trailing slash.
    pub base_url: String,

    /// Change frequency used when nothing more specific applies.
    pub default_change_frequency: ChangeFrequency,

    /// Priority used when nothing more specific applies, and as the
    /// replacement for a non-numeric priority during cleaning.
    pub default_priority: f64,
}

impl SitemapConfig {
    /// Create a config, normalizing the base URL.
    pub fn new(
        base_url: impl Into<String>,
        default_change_frequency: ChangeFrequency,
        default_priority: f64,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            default_change_frequency,
            default_priority,
        }
    }

    /// Join a path suffix onto the base URL.
    ///
    /// An empty suffix yields the site root (`{base_url}/`).
    pub fn url_for(&self, suffix: &str) -> String {
        format!("{}/{}", self.base_url, suffix)
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self::new(
            "https://www.indiatoolkit.in",
            ChangeFrequency::Monthly,
            0.5,
        )
    }
}

/// One `<url>` record of a sitemap document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

// ============================================================================
// Source records (generator input)
// ============================================================================

/// A tool page as seen by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRecord {
    pub slug: String,
    /// Usage signal on a 0-100 scale; `None` for unranked tools.
    pub popularity: Option<f64>,
    pub is_new: bool,
    pub last_modified: Option<DateTime<Utc>>,
}

/// A category page; `tool_count` and `has_new_tools` are derived by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub slug: String,
    pub tool_count: i64,
    pub has_new_tools: bool,
}

/// An informational page identified by its path suffix (`/` for the home page).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPageRecord {
    pub path: String,
}

impl StaticPageRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_frequency_parse_and_display() {
        assert_eq!("weekly".parse::<ChangeFrequency>().unwrap(), ChangeFrequency::Weekly);
        assert_eq!(" Daily ".parse::<ChangeFrequency>().unwrap(), ChangeFrequency::Daily);
        assert_eq!(ChangeFrequency::Never.to_string(), "never");
        assert!("fortnightly".parse::<ChangeFrequency>().is_err());
    }

    #[test]
    fn test_change_frequency_serde_lowercase() {
        let json = serde_json::to_string(&ChangeFrequency::Hourly).unwrap();
        assert_eq!(json, "\"hourly\"");
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = SitemapConfig::new("https://example.com/ ", ChangeFrequency::Daily, 0.4);
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.url_for("tool/x"), "https://example.com/tool/x");
        assert_eq!(config.url_for(""), "https://example.com/");
    }
}
