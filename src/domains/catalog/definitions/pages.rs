//! Informational pages listed in the pages sitemap.

/// Path suffixes of the site's static pages, home first.
pub const STATIC_PAGES: &[&str] = &[
    "/",
    "tools",
    "categories",
    "about",
    "contact",
    "privacy-policy",
    "terms",
];
