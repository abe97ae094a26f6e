//! Router assembly and the serve loop.

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, extract::Request, middleware::Next, response::Response, routing::get};
use tracing::info;

use crate::{api::filter::{count_filtered_listings, insert_listing}, db_utils::listings_file::ListingsFile};

pub mod config;
pub use config::ServerConfig;

pub const FILTER_ROUTE: &str = "/filter";

#[derive(Debug, Clone)]
pub struct AppState {
    pub listings: Arc<ListingsFile>,
}

impl AppState {
    pub fn new(listings: ListingsFile) -> Self {
        Self { listings: Arc::new(listings) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(FILTER_ROUTE, get(count_filtered_listings).post(insert_listing))
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let res = next.run(request).await;
    info!("{} {} -> {}", method, path, res.status());
    res
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(ListingsFile::new(config.listings_path.clone()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Serving listings from {} on {}", config.listings_path.display(), listener.local_addr()?);
    serve_on(listener, build_router(state)).await
}

pub async fn serve_on(listener: tokio::net::TcpListener, router: Router) -> anyhow::Result<()> {
    axum::serve(listener, router).await.context("server stopped")?;
    Ok(())
}
