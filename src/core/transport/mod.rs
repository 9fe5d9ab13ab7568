//! Transport layer for the sitemap server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: serves the sitemap documents and `robots.txt` - feature: `http`
//! - **STDIO**: writes one rendered document to stdout - feature: `stdio`
//!
//! # Feature Flags
//!
//! Transport implementations are conditionally compiled based on features:
//! - `http` (default): HTTP server - adds axum, tower, tower-http
//! - `stdio` (default): static export - no extra dependencies

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "http")]
pub use config::HttpConfig;

#[cfg(feature = "stdio")]
pub use config::StdioConfig;
