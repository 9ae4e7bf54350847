//! Development server for the Wingman demo
//!
//! Serves the `web/` directory (the page, the stylesheet and the
//! wasm-bindgen output) with correct MIME types and no caching.
//!
//! Environment:
//! - `PORT`: listen port (default 8080)
//! - `WINGMAN_WEB_ROOT`: directory to serve (default `web`)
//! - `RUST_LOG`: log filter (default `info`)

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let root = std::env::var("WINGMAN_WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let app = Router::new()
        .fallback_service(ServeDir::new(&root).append_index_html_on_directories(true))
        .layer(axum::middleware::from_fn(add_headers))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(url = %format!("http://localhost:{}", port), root = %root, "serving demo");
    axum::serve(listener, app).await
}

/// Fix MIME types and disable caching
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    let content_type = if path.ends_with(".js") || path.ends_with(".mjs") {
        Some("application/javascript; charset=utf-8")
    } else if path.ends_with(".wasm") {
        Some("application/wasm")
    } else if path.ends_with(".css") {
        Some("text/css; charset=utf-8")
    } else if path.ends_with(".html") {
        Some("text/html; charset=utf-8")
    } else {
        None
    };
    if let Some(value) = content_type {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
    }

    response
}
