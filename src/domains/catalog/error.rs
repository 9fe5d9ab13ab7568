//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur when resolving catalog identifiers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No tool is registered under this slug.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// No category is registered under this slug.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl CatalogError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(slug: impl Into<String>) -> Self {
        Self::UnknownTool(slug.into())
    }

    /// Create a new "unknown category" error.
    pub fn unknown_category(slug: impl Into<String>) -> Self {
        Self::UnknownCategory(slug.into())
    }
}
