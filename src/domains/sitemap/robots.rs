//! `robots.txt` rendering.

use super::document::SitemapDocument;
use super::entry::SitemapConfig;

/// Paths crawlers are asked to skip.
const DISALLOWED: &[&str] = &["/api/"];

/// Render `robots.txt`, pointing crawlers at the sitemap index.
pub fn render_robots(config: &SitemapConfig) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED {
        body.push_str("Disallow: ");
        body.push_str(path);
        body.push('\n');
    }
    body.push('\n');
    body.push_str("Sitemap: ");
    body.push_str(&SitemapDocument::Index.location(config));
    body.push('\n');
    body
}
