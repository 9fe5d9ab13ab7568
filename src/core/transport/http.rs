//! HTTP transport implementation.
//!
//! Serves the sitemap documents and `robots.txt` over plain GET requests.
//! Every request regenerates its document from the catalog.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use http::{StatusCode, header};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

use super::{TransportConfig, TransportError, TransportResult, config::HttpConfig};
use crate::core::SitemapServer;
use crate::domains::sitemap::SitemapDocument;

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: SitemapServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts HTTP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Http(http_config) => Some(Self::new(http_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: SitemapServer) -> TransportResult<()> {
        let addr = self.address();
        let app = router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Index:  GET {}", SitemapDocument::Index.path());
        for child in SitemapDocument::CHILDREN {
            info!("  → {:<6}  GET {}", child.name(), child.path());
        }
        info!("  → Robots: GET /robots.txt");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(server: SitemapServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route(SitemapDocument::Index.path(), get(sitemap_index))
        .route(SitemapDocument::Pages.path(), get(sitemap_pages))
        .route(SitemapDocument::Categories.path(), get(sitemap_categories))
        .route(SitemapDocument::Tools.path(), get(sitemap_tools))
        .route("/robots.txt", get(robots_txt))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Add CORS if enabled
    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides service info and the catalog behind the sitemaps.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let sitemap = &state.server.config().sitemap;
    let catalog = state.server.catalog();

    let categories: Vec<_> = catalog
        .categories()
        .iter()
        .zip(catalog.category_records())
        .map(|(category, record)| {
            serde_json::json!({
                "slug": category.slug(),
                "name": category.name(),
                "tools": record.tool_count,
            })
        })
        .collect();

    let tools: Vec<_> = catalog
        .tools()
        .iter()
        .map(|tool| {
            serde_json::json!({
                "slug": tool.slug(),
                "name": tool.name,
                "category": tool.category.slug(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "base_url": sitemap.base_url,
        "endpoints": {
            "index": SitemapDocument::Index.path(),
            "pages": SitemapDocument::Pages.path(),
            "categories": SitemapDocument::Categories.path(),
            "tools": SitemapDocument::Tools.path(),
            "robots": "/robots.txt",
            "health": "/health"
        },
        "catalog": {
            "categories": categories,
            "tools": tools,
            "pages": catalog.pages(),
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn sitemap_index(State(state): State<AppState>) -> Response {
    serve_document(&state, SitemapDocument::Index)
}

async fn sitemap_pages(State(state): State<AppState>) -> Response {
    serve_document(&state, SitemapDocument::Pages)
}

async fn sitemap_categories(State(state): State<AppState>) -> Response {
    serve_document(&state, SitemapDocument::Categories)
}

async fn sitemap_tools(State(state): State<AppState>) -> Response {
    serve_document(&state, SitemapDocument::Tools)
}

/// `robots.txt`.
async fn robots_txt(State(state): State<AppState>) -> Response {
    ([(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], state.server.robots()).into_response()
}

/// Render a document; failures become a 500 rather than a partial body.
#[instrument(skip(state))]
fn serve_document(state: &AppState, document: SitemapDocument) -> Response {
    match state.server.render(document) {
        Ok(xml) => ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml).into_response(),
        Err(e) => {
            error!("Failed to render {}: {}", document.path(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                "sitemap unavailable",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::catalog::{Catalog, CategoryId, ToolId};
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn app() -> Router {
        router(SitemapServer::new(Config::default()), false)
    }

    #[tokio::test]
    async fn test_tools_sitemap() {
        let (status, content_type, body) = get_body(app(), "/sitemap-tools.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(XML_CONTENT_TYPE));
        assert_eq!(body.matches("<url>").count(), ToolId::ALL.len());
        assert!(body.contains("<loc>https://www.indiatoolkit.in/tool/base64</loc>"));
    }

    #[tokio::test]
    async fn test_pages_and_categories_sitemaps() {
        let (status, _, pages) = get_body(app(), "/sitemap-pages.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(pages.contains("<loc>https://www.indiatoolkit.in/</loc>"));

        let (status, _, categories) = get_body(app(), "/sitemap-categories.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(categories.contains("<loc>https://www.indiatoolkit.in/category/converters</loc>"));
    }

    #[tokio::test]
    async fn test_sitemap_index() {
        let (status, _, body) = get_body(app(), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<sitemapindex"));
        assert!(body.contains("https://www.indiatoolkit.in/sitemap-categories.xml"));
    }

    #[tokio::test]
    async fn test_empty_catalog_serves_empty_sitemap() {
        let server = SitemapServer::with_catalog(Config::default(), Catalog::empty());
        let (status, _, body) = get_body(router(server, false), "/sitemap-tools.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<urlset"));
        assert!(!body.contains("<url>"));
    }

    #[tokio::test]
    async fn test_robots_and_health() {
        let (status, content_type, robots) = get_body(app(), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(TEXT_CONTENT_TYPE));
        assert!(robots.contains("Sitemap: https://www.indiatoolkit.in/sitemap.xml"));

        let (status, _, health) = get_body(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&health).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_root_lists_catalog() {
        let (status, _, body) = get_body(app(), "/").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["endpoints"]["tools"], "/sitemap-tools.xml");

        let categories = json["catalog"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), CategoryId::ALL.len());
        let converters = categories
            .iter()
            .find(|c| c["slug"] == "converters")
            .unwrap();
        assert_eq!(converters["name"], "Unit Converters");
        assert!(converters["tools"].as_i64().unwrap() > 0);

        let tools = json["catalog"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), ToolId::ALL.len());
        assert!(tools.iter().any(|t| t["slug"] == "base64"
            && t["name"] == "Base64 Encoder / Decoder"
            && t["category"] == "developer-tools"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, _, _) = get_body(app(), "/sitemap-blog.xml").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_address() {
        let transport = HttpTransport::new(HttpConfig::default());
        assert_eq!(transport.address(), "127.0.0.1:8080");
        assert!(HttpTransport::from_transport_config(&TransportConfig::http(9000, "0.0.0.0")).is_some());
    }
}
