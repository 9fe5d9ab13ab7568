//! Entry validator and cleaner.
//!
//! A stable filter over generated entries: entries with unusable URLs are
//! dropped, priorities are clamped, and repeated URLs keep only their first
//! occurrence. Running the cleaner over its own output changes nothing.

use std::collections::HashSet;
use tracing::debug;
use url::Url;

use super::entry::{SitemapConfig, SitemapEntry};

/// Why a URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRejection {
    /// Contains unencoded whitespace.
    Whitespace,
    /// Contains a character RFC 3986 does not allow unencoded.
    IllegalCharacter,
    /// Not parseable as an absolute URL.
    Unparseable,
    /// Scheme other than http/https, or no host.
    NotWeb,
    /// Does not live under the configured base URL.
    ForeignOrigin,
    /// Path contains an empty segment (`//`).
    DuplicateSlash,
}

/// Check a single URL against the sitemap rules.
pub fn check_url(url: &str, config: &SitemapConfig) -> Result<(), UrlRejection> {
    if url.chars().any(char::is_whitespace) {
        return Err(UrlRejection::Whitespace);
    }

    if !url.chars().all(is_uri_char) {
        return Err(UrlRejection::IllegalCharacter);
    }

    let parsed = Url::parse(url).map_err(|_| UrlRejection::Unparseable)?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(UrlRejection::NotWeb);
    }

    if !under_base(url, &config.base_url) {
        return Err(UrlRejection::ForeignOrigin);
    }

    if parsed.path().contains("//") {
        return Err(UrlRejection::DuplicateSlash);
    }

    Ok(())
}

/// Clean a batch of entries, preserving the order of survivors.
pub fn clean_entries(entries: Vec<SitemapEntry>, config: &SitemapConfig) -> Vec<SitemapEntry> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut cleaned = Vec::with_capacity(entries.len());

    for mut entry in entries {
        if let Err(reason) = check_url(&entry.url, config) {
            debug!("Dropping sitemap entry {:?}: {:?}", entry.url, reason);
            continue;
        }

        if seen.contains(&entry.url) {
            debug!("Dropping duplicate sitemap entry {}", entry.url);
            continue;
        }

        entry.priority = clamp_priority(entry.priority, config.default_priority);
        seen.insert(entry.url.clone());
        cleaned.push(entry);
    }

    cleaned
}

/// Clamp into [0, 1]; non-numeric values take the (clamped) default.
pub fn clamp_priority(priority: f64, default: f64) -> f64 {
    if priority.is_nan() {
        return if default.is_nan() { 0.0 } else { default.clamp(0.0, 1.0) };
    }
    priority.clamp(0.0, 1.0)
}

/// Unreserved, reserved, or `%` of a percent-encoding.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}

/// True when `url` is the base itself or a path beneath it.
///
/// `https://a.com` must not admit `https://a.com.evil.net/...`.
fn under_base(url: &str, base: &str) -> bool {
    match url.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::sitemap::entry::ChangeFrequency;
    use chrono::{TimeZone, Utc};

    fn entry(url: &str, priority: f64) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            last_modified: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            change_frequency: ChangeFrequency::Monthly,
            priority,
        }
    }

    #[test]
    fn test_check_url_rules() {
        let config = SitemapConfig::default();
        let ok = "https://www.indiatoolkit.in/tool/json-formatter";
        assert_eq!(check_url(ok, &config), Ok(()));

        assert_eq!(check_url("not a url", &config), Err(UrlRejection::Whitespace));
        assert_eq!(check_url("not-a-url", &config), Err(UrlRejection::Unparseable));
        assert_eq!(check_url("ftp://www.indiatoolkit.in/x", &config), Err(UrlRejection::NotWeb));
        assert_eq!(
            check_url("https://example.com/tool/x", &config),
            Err(UrlRejection::ForeignOrigin)
        );
        assert_eq!(
            check_url("https://www.indiatoolkit.in.evil.net/tool/x", &config),
            Err(UrlRejection::ForeignOrigin)
        );
        assert_eq!(
            check_url("https://www.indiatoolkit.in/tool//x", &config),
            Err(UrlRejection::DuplicateSlash)
        );
        assert_eq!(
            check_url("https://www.indiatoolkit.in/tool/a b", &config),
            Err(UrlRejection::Whitespace)
        );
    }

    #[test]
    fn test_check_url_rejects_characters_outside_uri_set() {
        let config = SitemapConfig::default();
        for url in [
            "https://www.indiatoolkit.in/tool/caf\u{e9}",
            "https://www.indiatoolkit.in/tool/<x>",
            "https://www.indiatoolkit.in/tool/\"quoted\"",
            "https://www.indiatoolkit.in/tool/a|b",
            "https://www.indiatoolkit.in/tool/{id}",
        ] {
            assert_eq!(
                check_url(url, &config),
                Err(UrlRejection::IllegalCharacter),
                "{url}"
            );
        }

        let encoded = "https://www.indiatoolkit.in/tool/caf%C3%A9";
        assert_eq!(check_url(encoded, &config), Ok(()));
    }

    #[test]
    fn test_double_slash_only_rejected_in_path() {
        let config = SitemapConfig::default();
        let with_query = "https://www.indiatoolkit.in/tool/x?ref=https://example.com/a";
        assert_eq!(check_url(with_query, &config), Ok(()));

        assert_eq!(
            check_url("https://www.indiatoolkit.in//tool/x?ref=1", &config),
            Err(UrlRejection::DuplicateSlash)
        );
    }

    #[test]
    fn test_malformed_entries_dropped_valid_kept() {
        let config = SitemapConfig::default();
        let valid = entry("https://www.indiatoolkit.in/tool/json-formatter", 0.8);

        let cleaned = clean_entries(vec![entry("not a url", 0.5), valid.clone()], &config);

        assert_eq!(cleaned, vec![valid]);
    }

    #[test]
    fn test_priority_clamped() {
        let config = SitemapConfig::default();
        let cleaned = clean_entries(
            vec![
                entry("https://www.indiatoolkit.in/a", -3.0),
                entry("https://www.indiatoolkit.in/b", 7.5),
                entry("https://www.indiatoolkit.in/c", f64::NAN),
                entry("https://www.indiatoolkit.in/d", f64::INFINITY),
            ],
            &config,
        );

        let priorities: Vec<f64> = cleaned.iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![0.0, 1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let config = SitemapConfig::default();
        let first = entry("https://www.indiatoolkit.in/tool/base64", 0.9);
        let second = entry("https://www.indiatoolkit.in/tool/base64", 0.3);
        let other = entry("https://www.indiatoolkit.in/tool/uuid-generator", 0.6);

        let cleaned = clean_entries(vec![first.clone(), other.clone(), second], &config);

        assert_eq!(cleaned, vec![first, other]);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let config = SitemapConfig::default();
        let raw = vec![
            entry("https://www.indiatoolkit.in/", 1.4),
            entry("https://www.indiatoolkit.in/about", 0.5),
            entry("https://www.indiatoolkit.in/about", 0.1),
            entry("bad url", 0.5),
            entry("https://www.indiatoolkit.in/tool/x", f64::NAN),
        ];

        let once = clean_entries(raw, &config);
        let twice = clean_entries(once.clone(), &config);

        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_entries(Vec::new(), &SitemapConfig::default()).is_empty());
    }
}
