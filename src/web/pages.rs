//! Page handlers

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tera::Context as TeraContext;

use super::error::PageError;
use super::views::{document_href, status_options, DocumentDetail, DocumentRow, Filters};
use super::{sidebar_for, AppState};
use crate::config::DashboardSource;
use crate::dashboard::{load_live, Dashboard};
use crate::models::{count_tree, DocumentQuery, DocumentStatus};
use crate::shell::{find_entry, Sidebar};

type PageResult = Result<Html<String>, PageError>;

fn render(state: &AppState, template: &str, sidebar: &Sidebar, context: TeraContext) -> PageResult {
    Ok(Html(state.renderer.render_page(template, sidebar, context)?))
}

/// `GET /`
pub async fn dashboard(State(state): State<AppState>, uri: Uri) -> PageResult {
    let dashboard = match state.dashboard.source {
        DashboardSource::Mock => Dashboard::sample(),
        DashboardSource::Live => load_live(&state.client, state.dashboard.recent_limit).await?,
    };

    let mut context = TeraContext::new();
    context.insert("dashboard", &dashboard);
    render(&state, "dashboard.html", &sidebar_for(&uri), context)
}

/// Query string of the document list
#[derive(Debug, Default, Deserialize)]
pub struct DocumentsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    /// Unknown or blank values mean no status filter
    pub status: Option<String>,
}

impl DocumentsParams {
    fn into_query(self) -> DocumentQuery {
        DocumentQuery {
            category: self.category,
            search: self.search,
            status: self
                .status
                .and_then(|s| s.parse::<DocumentStatus>().ok()),
        }
        .normalized()
    }
}

/// `GET /documents`
pub async fn documents(
    State(state): State<AppState>,
    Query(params): Query<DocumentsParams>,
    uri: Uri,
) -> PageResult {
    let query = params.into_query();
    let page = state.client.documents().get_all(&query).await?;
    let rows: Vec<DocumentRow> = page.results.iter().map(DocumentRow::new).collect();

    let mut context = TeraContext::new();
    context.insert("documents", &rows);
    context.insert("count", &page.count);
    context.insert("filters", &Filters::from(&query));
    context.insert("statuses", &status_options());
    render(&state, "documents.html", &sidebar_for(&uri), context)
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}

/// `GET /documents/{slug}`
pub async fn document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<NoticeParams>,
    uri: Uri,
) -> PageResult {
    let doc = state.client.documents().get_by_slug(&slug).await?;

    let mut context = TeraContext::new();
    context.insert("document", &DocumentDetail::new(&doc));
    context.insert("notice", &params.notice);
    render(&state, "document.html", &sidebar_for(&uri), context)
}

/// `POST /documents/{slug}/approve`
pub async fn approve(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Result<Redirect, PageError> {
    let response = state.client.documents().approve(&slug).await?;
    tracing::info!(slug = %slug, "Document approved");

    let notice = response
        .message
        .unwrap_or_else(|| "Documento aprobado".to_string());
    Ok(back_to_document(&slug, &notice, &sidebar_for(&uri)))
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectForm {
    /// Optional, a missing field is sent as an empty reason
    #[serde(default)]
    pub reason: String,
}

/// `POST /documents/{slug}/reject`
pub async fn reject(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    Form(form): Form<RejectForm>,
) -> Result<Redirect, PageError> {
    let response = state
        .client
        .documents()
        .reject(&slug, form.reason.trim())
        .await?;
    tracing::info!(slug = %slug, "Document rejected");

    let notice = response
        .message
        .unwrap_or_else(|| "Documento rechazado".to_string());
    Ok(back_to_document(&slug, &notice, &sidebar_for(&uri)))
}

/// Detail page URL with a notice, keeping the collapse state
fn back_to_document(slug: &str, notice: &str, sidebar: &Sidebar) -> Redirect {
    let mut location = format!(
        "{}?notice={}",
        document_href(slug),
        urlencoding::encode(notice)
    );
    if sidebar.is_collapsed() {
        location.push_str("&sidebar=collapsed");
    }
    Redirect::to(&location)
}

/// `GET /categories`
pub async fn categories(State(state): State<AppState>, uri: Uri) -> PageResult {
    let tree = state.client.categories().get_tree().await?;

    let mut context = TeraContext::new();
    context.insert("total", &count_tree(&tree));
    context.insert("categories", &tree);
    render(&state, "categories.html", &sidebar_for(&uri), context)
}

/// `GET /categories/{slug}`
pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> PageResult {
    let category = state.client.categories().get_by_slug(&slug).await?;
    let page = state
        .client
        .documents()
        .get_all(&DocumentQuery::default().in_category(slug))
        .await?;
    let rows: Vec<DocumentRow> = page.results.iter().map(DocumentRow::new).collect();

    let mut context = TeraContext::new();
    context.insert("category", &category);
    context.insert("documents", &rows);
    render(&state, "category.html", &sidebar_for(&uri), context)
}

/// Navigation routes without content yet
pub async fn placeholder(State(state): State<AppState>, uri: Uri) -> PageResult {
    let entry = find_entry(uri.path()).ok_or(PageError::NotFound)?;

    let mut context = TeraContext::new();
    context.insert("page_name", entry.name);
    context.insert("icon", entry.icon);
    render(&state, "placeholder.html", &sidebar_for(&uri), context)
}

/// Fallback for unknown paths
pub async fn not_found() -> PageError {
    PageError::NotFound
}
