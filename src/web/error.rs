//! Page errors
//!
//! A handler failure becomes a `PageError`. Its response carries an
//! `ErrorPage` extension which the `render_errors` middleware turns into an
//! error page drawn inside the navigation shell.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Extension,
};
use tera::Context as TeraContext;
use thiserror::Error;

use super::{sidebar_for, AppState};
use crate::client::ClientError;
use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum PageError {
    /// No route matches the request
    #[error("Page not found")]
    NotFound,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PageError {
    /// 404 when the backend says not found, 502 for any other backend
    /// failure, 500 when the page itself cannot be rendered.
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Client(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            PageError::Client(_) => StatusCode::BAD_GATEWAY,
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "Página no encontrada",
            StatusCode::BAD_GATEWAY => "Servicio no disponible",
            _ => "Error interno",
        }
    }

    fn message(&self) -> String {
        match self {
            PageError::NotFound => "La página solicitada no existe.".to_string(),
            PageError::Client(e) => e.backend_message().unwrap_or_else(|| {
                if e.is_not_found() {
                    "El recurso solicitado no existe.".to_string()
                } else {
                    "No se pudo contactar la base de conocimiento.".to_string()
                }
            }),
            PageError::Render(_) => "No se pudo generar la página.".to_string(),
        }
    }
}

/// What the error page shows
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = ErrorPage {
            status: self.status(),
            title: self.title(),
            message: self.message(),
        };

        match &self {
            PageError::Render(e) => tracing::error!("Page rendering failed: {}", e),
            PageError::Client(e) => tracing::warn!(status = %page.status, "Backend request failed: {}", e),
            PageError::NotFound => tracing::debug!("No page for request"),
        }

        // Plain text stays as the body if the shell cannot be rendered
        let body = format!("{} {}: {}", page.status.as_u16(), page.title, page.message);
        (page.status, Extension(page), body).into_response()
    }
}

/// Render `ErrorPage` responses inside the navigation shell
pub async fn render_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let sidebar = sidebar_for(request.uri());
    let response = next.run(request).await;

    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let mut context = TeraContext::new();
    context.insert("status", &page.status.as_u16());
    context.insert("title", page.title);
    context.insert("message", &page.message);

    match state.renderer.render_page("error.html", &sidebar, context) {
        Ok(html) => (page.status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            response
        }
    }
}
