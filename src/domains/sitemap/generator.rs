//! Entry generator: maps one source record to one sitemap entry.
//!
//! All functions are pure. `now` is supplied by the caller so that every
//! entry of a single document shares the same default timestamp.

use chrono::{DateTime, Utc};

use super::entry::{
    CategoryRecord, ChangeFrequency, SitemapConfig, SitemapEntry, StaticPageRecord, ToolRecord,
};
use super::error::SitemapError;

/// Priority of a tool with no popularity signal.
const TOOL_PRIORITY_FLOOR: f64 = 0.5;

/// Upper end of the popularity scale.
const MAX_POPULARITY: f64 = 100.0;

const CATEGORY_BASE_PRIORITY: f64 = 0.6;
const CATEGORY_COUNT_WEIGHT: f64 = 0.3;
/// Tool count at which a category reaches half of its count bonus.
const CATEGORY_HALF_SATURATION: f64 = 10.0;
const CATEGORY_NEW_TOOLS_BONUS: f64 = 0.1;

/// Fixed priority and change frequency for known informational pages.
///
/// Keys are path suffixes without leading or trailing slashes; the home
/// page is the empty suffix.
const PAGE_TABLE: &[(&str, f64, ChangeFrequency)] = &[
    ("", 1.0, ChangeFrequency::Daily),
    ("tools", 0.9, ChangeFrequency::Daily),
    ("categories", 0.8, ChangeFrequency::Weekly),
    ("about", 0.5, ChangeFrequency::Monthly),
    ("contact", 0.5, ChangeFrequency::Monthly),
    ("privacy-policy", 0.3, ChangeFrequency::Yearly),
    ("terms", 0.3, ChangeFrequency::Yearly),
];

/// Build the entry for a tool page (`{base}/tool/{slug}`).
pub fn tool_entry(
    record: &ToolRecord,
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> Result<SitemapEntry, SitemapError> {
    let slug = resolve_slug(&record.slug, "tool")?;

    let change_frequency = if record.is_new {
        ChangeFrequency::Weekly
    } else {
        ChangeFrequency::Monthly
    };

    Ok(SitemapEntry {
        url: config.url_for(&format!("tool/{slug}")),
        last_modified: record.last_modified.unwrap_or(now),
        change_frequency,
        priority: tool_priority(record.popularity),
    })
}

/// Build the entry for a category page (`{base}/category/{slug}`).
pub fn category_entry(
    record: &CategoryRecord,
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> Result<SitemapEntry, SitemapError> {
    let slug = resolve_slug(&record.slug, "category")?;

    let change_frequency = if record.has_new_tools {
        ChangeFrequency::Weekly
    } else {
        ChangeFrequency::Monthly
    };

    Ok(SitemapEntry {
        url: config.url_for(&format!("category/{slug}")),
        last_modified: now,
        change_frequency,
        priority: category_priority(record.tool_count, record.has_new_tools),
    })
}

/// Build the entry for an informational page.
///
/// Known pages take their priority and frequency from the static table;
/// anything else falls back to the config defaults.
pub fn page_entry(
    record: &StaticPageRecord,
    config: &SitemapConfig,
    now: DateTime<Utc>,
) -> Result<SitemapEntry, SitemapError> {
    let raw = record.path.trim();
    if raw.is_empty() {
        return Err(SitemapError::missing_identifier("page"));
    }
    let suffix = raw.trim_matches('/');

    let (priority, change_frequency) = PAGE_TABLE
        .iter()
        .find(|(key, _, _)| *key == suffix)
        .map(|(_, priority, freq)| (*priority, *freq))
        .unwrap_or((config.default_priority, config.default_change_frequency));

    Ok(SitemapEntry {
        url: config.url_for(suffix),
        last_modified: now,
        change_frequency,
        priority,
    })
}

/// Map a 0-100 popularity signal onto [0.5, 1.0].
fn tool_priority(popularity: Option<f64>) -> f64 {
    match popularity.filter(|p| p.is_finite()) {
        Some(p) => {
            let share = p.clamp(0.0, MAX_POPULARITY) / MAX_POPULARITY;
            round2(TOOL_PRIORITY_FLOOR + (1.0 - TOOL_PRIORITY_FLOOR) * share)
        }
        None => TOOL_PRIORITY_FLOOR,
    }
}

/// Saturating in `tool_count`; never exceeds 1.0.
fn category_priority(tool_count: i64, has_new_tools: bool) -> f64 {
    let n = tool_count.max(0) as f64;
    let mut priority =
        CATEGORY_BASE_PRIORITY + CATEGORY_COUNT_WEIGHT * (n / (n + CATEGORY_HALF_SATURATION));
    if has_new_tools {
        priority += CATEGORY_NEW_TOOLS_BONUS;
    }
    round2(priority.min(1.0))
}

fn resolve_slug<'a>(slug: &'a str, kind: &'static str) -> Result<&'a str, SitemapError> {
    let slug = slug.trim().trim_matches('/');
    if slug.is_empty() {
        return Err(SitemapError::missing_identifier(kind));
    }
    Ok(slug)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn tool(slug: &str, popularity: Option<f64>, is_new: bool) -> ToolRecord {
        ToolRecord {
            slug: slug.to_string(),
            popularity,
            is_new,
            last_modified: None,
        }
    }

    fn category(slug: &str, tool_count: i64, has_new_tools: bool) -> CategoryRecord {
        CategoryRecord {
            slug: slug.to_string(),
            tool_count,
            has_new_tools,
        }
    }

    #[test]
    fn test_tool_entry_url_and_frequency() {
        let config = SitemapConfig::default();
        let entry = tool_entry(&tool("json-formatter", Some(90.0), false), &config, now()).unwrap();

        assert_eq!(entry.url, "https://www.indiatoolkit.in/tool/json-formatter");
        assert_eq!(entry.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(entry.last_modified, now());
        assert_eq!(entry.priority, 0.95);

        let fresh = tool_entry(&tool("uuid-generator", None, true), &config, now()).unwrap();
        assert_eq!(fresh.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(fresh.priority, TOOL_PRIORITY_FLOOR);
    }

    #[test]
    fn test_tool_entry_keeps_explicit_timestamp() {
        let config = SitemapConfig::default();
        let updated = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let mut record = tool("base64", Some(10.0), false);
        record.last_modified = Some(updated);

        let entry = tool_entry(&record, &config, now()).unwrap();
        assert_eq!(entry.last_modified, updated);
    }

    #[test]
    fn test_tool_priority_clamped_for_extreme_popularity() {
        let config = SitemapConfig::default();
        for popularity in [f64::MIN, -5.0, 0.0, 55.5, 100.0, 1e12, f64::MAX, f64::NAN, f64::INFINITY] {
            let entry = tool_entry(&tool("x", Some(popularity), false), &config, now()).unwrap();
            assert!(
                (0.0..=1.0).contains(&entry.priority),
                "popularity {popularity} gave {}",
                entry.priority
            );
        }
    }

    #[test]
    fn test_tool_priority_is_monotonic() {
        assert!(tool_priority(Some(20.0)) <= tool_priority(Some(80.0)));
        assert_eq!(tool_priority(Some(100.0)), 1.0);
        assert_eq!(tool_priority(Some(0.0)), TOOL_PRIORITY_FLOOR);
    }

    #[test]
    fn test_blank_slug_is_a_construction_error() {
        let config = SitemapConfig::default();
        let err = tool_entry(&tool("   ", Some(50.0), false), &config, now()).unwrap_err();
        assert!(matches!(err, SitemapError::MissingIdentifier { kind: "tool" }));

        let err = category_entry(&category("/", 3, false), &config, now()).unwrap_err();
        assert!(matches!(err, SitemapError::MissingIdentifier { kind: "category" }));
    }

    #[test]
    fn test_category_priority_monotonic_in_tool_count() {
        let config = SitemapConfig::default();
        let few = category_entry(&category("converters", 5, false), &config, now()).unwrap();
        let many = category_entry(&category("converters", 50, false), &config, now()).unwrap();

        assert!(many.priority >= few.priority);
        assert_eq!(few.url, "https://www.indiatoolkit.in/category/converters");
    }

    #[test]
    fn test_category_new_tools_bonus_and_clamp() {
        let config = SitemapConfig::default();
        let plain = category_entry(&category("text-tools", 8, false), &config, now()).unwrap();
        let fresh = category_entry(&category("text-tools", 8, true), &config, now()).unwrap();
        assert!(fresh.priority > plain.priority);
        assert_eq!(fresh.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(plain.change_frequency, ChangeFrequency::Monthly);

        for count in [i64::MIN, -1, 0, 1, 1_000, i64::MAX] {
            let entry = category_entry(&category("c", count, true), &config, now()).unwrap();
            assert!((0.0..=1.0).contains(&entry.priority));
        }
    }

    #[test]
    fn test_page_entry_table_and_defaults() {
        let config = SitemapConfig::new("https://example.com", ChangeFrequency::Yearly, 0.2);

        let home = page_entry(&StaticPageRecord::new("/"), &config, now()).unwrap();
        assert_eq!(home.url, "https://example.com/");
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.change_frequency, ChangeFrequency::Daily);

        let about = page_entry(&StaticPageRecord::new("/about/"), &config, now()).unwrap();
        assert_eq!(about.url, "https://example.com/about");
        assert_eq!(about.change_frequency, ChangeFrequency::Monthly);

        let unknown = page_entry(&StaticPageRecord::new("press"), &config, now()).unwrap();
        assert_eq!(unknown.priority, 0.2);
        assert_eq!(unknown.change_frequency, ChangeFrequency::Yearly);

        assert!(page_entry(&StaticPageRecord::new("  "), &config, now()).is_err());
    }
}
