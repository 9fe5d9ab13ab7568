//! Toolkit Sitemaps Library
//!
//! Generates, validates and serves the XML sitemaps of a directory of
//! browser-based utility tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handle and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: the static tools, categories and pages
//!   - **sitemap**: entry generation, cleaning, stats and XML output
//!
//! # Example
//!
//! ```rust,no_run
//! use toolkit_sitemaps::{core::Config, core::SitemapServer};
//! use toolkit_sitemaps::domains::sitemap::SitemapDocument;
//!
//! let server = SitemapServer::new(Config::from_env());
//! let xml = server.render(SitemapDocument::Tools)?;
//! println!("{xml}");
//! # Ok::<(), toolkit_sitemaps::Error>(())
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, SitemapServer};
