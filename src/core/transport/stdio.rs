//! STDIO transport implementation.
//!
//! Renders one document to standard output and exits, for exporting the
//! sitemaps as static files during a site build.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::config::StdioConfig;
use super::{TransportError, TransportResult};
use crate::core::SitemapServer;
use crate::domains::sitemap::SitemapDocument;

/// STDIO transport handler.
pub struct StdioTransport {
    config: StdioConfig,
}

impl StdioTransport {
    /// Create a new STDIO transport with the given config.
    pub fn new(config: StdioConfig) -> Self {
        Self { config }
    }

    /// Run the STDIO transport.
    pub async fn run(self, server: SitemapServer) -> TransportResult<()> {
        let document = self.config.document;
        let mut stdout = tokio::io::stdout();
        let written = write_document(&server, document, &mut stdout).await?;

        info!("Wrote {} ({} bytes) to stdout", document.path(), written);
        Ok(())
    }
}

/// Render `document` into `writer`, returning the number of bytes written.
pub async fn write_document<W>(
    server: &SitemapServer,
    document: SitemapDocument,
    writer: &mut W,
) -> TransportResult<usize>
where
    W: AsyncWrite + Unpin,
{
    let xml = server
        .render(document)
        .map_err(|e| TransportError::render(e.to_string()))?;

    writer.write_all(xml.as_bytes()).await?;
    writer.flush().await?;
    Ok(xml.len())
}
