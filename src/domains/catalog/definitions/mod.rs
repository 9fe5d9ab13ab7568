//! Catalog definitions module.
//!
//! Static, compiled-in descriptions of everything the site links to:
//! - `tools.rs` - the tool registry (`ToolId`)
//! - `categories.rs` - tool categories (`CategoryId`)
//! - `pages.rs` - informational pages
//!
//! ## Adding a New Tool
//!
//! 1. Add a variant to `ToolId` and to `ToolId::ALL`
//! 2. Give it a slug and a descriptor
//!
//! The sitemaps pick it up without further changes.

pub mod categories;
pub mod pages;
pub mod tools;

pub use categories::CategoryId;
pub use pages::STATIC_PAGES;
pub use tools::{ToolDescriptor, ToolId};
