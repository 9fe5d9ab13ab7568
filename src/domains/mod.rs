//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the static tools, categories and pages the site links to
//! - **sitemap**: entry generation, cleaning and serialization

pub mod catalog;
pub mod sitemap;
