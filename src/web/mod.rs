//! Page server
//!
//! Server-rendered pages for the navigation shell:
//! - `/` dashboard
//! - `/documents`, `/documents/{slug}` plus the approve/reject actions
//! - `/categories`, `/categories/{slug}`
//! - placeholder pages for the remaining navigation routes
//! - `/static/{path}` embedded assets

mod error;
mod pages;
mod views;


use axum::{
    extract::{Path, Query},
    http::{header, StatusCode, Uri},
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::client::ApiClient;
use crate::config::DashboardConfig;
use crate::render::{self, Renderer};
use crate::shell::Sidebar;

pub use error::{ErrorPage, PageError};

/// Shared state of the page handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub renderer: Arc<Renderer>,
    pub dashboard: DashboardConfig,
}

impl AppState {
    pub fn new(client: ApiClient, renderer: Renderer, dashboard: DashboardConfig) -> Self {
        Self {
            client: Arc::new(client),
            renderer: Arc::new(renderer),
            dashboard,
        }
    }
}

/// Build the page router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::dashboard))
        .route("/documents", get(pages::documents))
        .route("/documents/{slug}", get(pages::document))
        .route("/documents/{slug}/approve", post(pages::approve))
        .route("/documents/{slug}/reject", post(pages::reject))
        .route("/categories", get(pages::categories))
        .route("/categories/{slug}", get(pages::category))
        .route("/knowledge", get(pages::placeholder))
        .route("/organizational", get(pages::placeholder))
        .route("/reports", get(pages::placeholder))
        .route("/settings", get(pages::placeholder))
        .route("/static/{*path}", get(serve_static))
        .fallback(pages::not_found)
        // Draws error pages inside the shell, so it wraps every route
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            error::render_errors,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct ShellParams {
    sidebar: Option<String>,
}

/// Sidebar state for a request: its path, the `sidebar` query flag and the
/// remaining query parameters
pub(crate) fn sidebar_for(uri: &Uri) -> Sidebar {
    let params = Query::<ShellParams>::try_from_uri(uri)
        .map(|Query(params)| params)
        .unwrap_or_default();
    Sidebar::from_query(uri.path(), params.sidebar.as_deref())
        .with_query(uri.query().unwrap_or(""))
}

/// Serve an embedded asset
async fn serve_static(Path(path): Path<String>) -> Response {
    match render::asset(&path) {
        Some(data) => (
            [
                (header::CONTENT_TYPE, render::content_type(&path)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            data,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
