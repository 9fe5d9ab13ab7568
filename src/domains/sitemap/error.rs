//! Sitemap-specific error types.

use thiserror::Error;

/// Errors that can occur while building or rendering a sitemap.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A source record has no usable identifier.
    #[error("{kind} record has no identifier")]
    MissingIdentifier { kind: &'static str },

    /// A change frequency string is not part of the sitemap protocol.
    #[error("Invalid change frequency: {0}")]
    InvalidChangeFrequency(String),

    /// The requested document name is unknown.
    #[error("Unknown sitemap document: {0}")]
    UnknownDocument(String),

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(String),
}

impl SitemapError {
    /// Create a new "missing identifier" error.
    pub fn missing_identifier(kind: &'static str) -> Self {
        Self::MissingIdentifier { kind }
    }

    /// Create a new "invalid change frequency" error.
    pub fn invalid_change_frequency(value: impl Into<String>) -> Self {
        Self::InvalidChangeFrequency(value.into())
    }

    /// Create a new "unknown document" error.
    pub fn unknown_document(name: impl Into<String>) -> Self {
        Self::UnknownDocument(name.into())
    }

    /// Create a new XML error.
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }
}
