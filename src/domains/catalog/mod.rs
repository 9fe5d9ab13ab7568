//! Catalog domain module.
//!
//! The static data the sitemaps describe: tools, categories and
//! informational pages. Nothing here changes at runtime.
//!
//! ## Architecture
//!
//! - `definitions/` - the tool registry, categories and pages
//! - `registry.rs` - `Catalog`, which turns definitions into generator records
//! - `error.rs` - catalog lookup errors

pub mod definitions;
mod error;
mod registry;

pub use definitions::{CategoryId, STATIC_PAGES, ToolDescriptor, ToolId};
pub use error::CatalogError;
pub use registry::Catalog;
