//! Sitemap domain module.
//!
//! Generates, cleans and serializes the site's sitemap documents.
//!
//! ## Architecture
//!
//! - `entry.rs` - entry, config and source record types
//! - `generator.rs` - one entry per source record
//! - `validator.rs` - URL checks, priority clamping, deduplication
//! - `stats.rs` - diagnostic summaries
//! - `document.rs` - the documents and the per-document pipeline
//! - `xml.rs` / `robots.rs` - output formats
//! - `service.rs` - request-time rendering

mod document;
mod entry;
mod error;
pub mod generator;
mod robots;
mod service;
mod stats;
pub mod validator;
pub mod xml;

pub use document::{
    SitemapBuild, SitemapDocument, build_category_entries, build_entries, build_page_entries,
    build_tool_entries,
};
pub use entry::{
    CategoryRecord, ChangeFrequency, SitemapConfig, SitemapEntry, StaticPageRecord, ToolRecord,
};
pub use error::SitemapError;
pub use robots::render_robots;
pub use service::SitemapService;
pub use stats::{StatsSummary, summarize};
pub use validator::clean_entries;
