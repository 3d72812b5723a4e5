//! Test helpers: an in-process knowledge base backend
//!
//! `MockBackend` binds an axum app to an ephemeral local port, records every
//! request it receives and answers with canned fixtures. Slug `missing` is
//! always 404, slug `draft-doc` refuses workflow actions, and slug `broken`
//! answers with a body that is not JSON.
//!
//! `ErrorLog` captures the error events the crate emits while installed.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::client::ApiClient;

/// Request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the `/api/v1` prefix, still percent-encoded
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Request body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct MockBackend {
    pub base_url: String,
    requests: RequestLog,
    handle: JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let requests: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .fallback(handle_request)
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            requests,
            handle,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::from_base_url(&self.base_url).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base URL of a local port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v1", addr)
}

/// Error-level events emitted by this crate, by message
#[derive(Clone, Default)]
pub struct ErrorLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ErrorLog {
    /// Capture events on the current thread until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl<S: Subscriber> Layer<S> for ErrorLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() != Level::ERROR || !metadata.target().starts_with("icasa_geo") {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.messages.lock().unwrap().push(visitor.message);
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

async fn handle_request(
    State(requests): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = String::from_utf8_lossy(&body).into_owned();
    requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    let path = uri.path().strip_prefix("/api/v1").unwrap_or(uri.path());
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let query = uri.query().unwrap_or("");

    match (method.as_str(), segments.as_slice()) {
        (_, ["knowledge", _, "missing", ..]) => {
            (StatusCode::NOT_FOUND, Json(json!({"detail": "No encontrado."}))).into_response()
        }
        (_, ["knowledge", _, "broken", ..]) => (StatusCode::OK, "<html>not json</html>").into_response(),

        ("GET", ["knowledge", "categories"]) => {
            let tree = category_tree();
            Json(json!({"count": tree.len(), "next": null, "previous": null, "results": tree}))
                .into_response()
        }
        ("GET", ["knowledge", "categories", "tree"]) => Json(category_tree()).into_response(),
        ("GET", ["knowledge", "categories", slug]) => Json(category(30, slug, slug)).into_response(),
        ("POST", ["knowledge", "categories"]) => {
            let input: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let name = input["name"].as_str().unwrap_or("Nueva").to_string();
            let slug = input["slug"].as_str().unwrap_or("nueva").to_string();
            (StatusCode::CREATED, Json(category(40, &name, &slug))).into_response()
        }
        ("PUT", ["knowledge", "categories", slug]) => {
            let input: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let name = input["name"].as_str().unwrap_or(*slug).to_string();
            Json(category(30, &name, slug)).into_response()
        }

        ("GET", ["knowledge", "documents"]) => {
            let docs: Vec<Value> = documents()
                .into_iter()
                .filter(|d| !query.contains("status=review") || d["status"] == "review")
                .collect();
            Json(json!({"count": docs.len(), "next": null, "previous": null, "results": docs}))
                .into_response()
        }
        ("GET", ["knowledge", "documents", slug]) => {
            let doc = documents()
                .into_iter()
                .find(|d| d["slug"] == *slug)
                .unwrap_or_else(|| document(slug, "review"));
            Json(doc).into_response()
        }
        ("POST", ["knowledge", "documents"]) => {
            let input: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            (StatusCode::CREATED, Json(document_write(&input))).into_response()
        }
        ("PUT", ["knowledge", "documents", _]) => {
            let input: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            Json(document_write(&input)).into_response()
        }
        ("POST", ["knowledge", "documents", "draft-doc", action]) => {
            let verb = if *action == "approve" { "aprobar" } else { "rechazar" };
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Solo se pueden {} documentos en revisión", verb)})),
            )
                .into_response()
        }
        ("POST", ["knowledge", "documents", _, "approve"]) => {
            Json(json!({"message": "Documento aprobado exitosamente"})).into_response()
        }
        ("POST", ["knowledge", "documents", _, "reject"]) => {
            Json(json!({"message": "Documento rechazado"})).into_response()
        }

        ("DELETE", ["knowledge", "categories" | "documents", _]) => StatusCode::NO_CONTENT.into_response(),

        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "No encontrado."}))).into_response(),
    }
}

pub fn category(id: i64, name: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": slug,
        "description": "",
        "icon": "folder",
        "color": "green",
        "is_active": true,
        "children": []
    })
}

pub fn category_tree() -> Vec<Value> {
    let mut rrhh = category(1, "Recursos Humanos", "rrhh");
    rrhh["children"] = json!([category(2, "Políticas", "politicas")]);
    vec![rrhh, category(3, "Tecnología", "tecnologia"), category(4, "Estructura", "estructura")]
}

pub fn document(slug: &str, status: &str) -> Value {
    let (title, code, category_value, display) = match slug {
        "politica-de-vacaciones" => (
            "Política de Vacaciones",
            "POL-001",
            category(1, "Recursos Humanos", "rrhh"),
            "Aprobado",
        ),
        "manual-it" => (
            "Manual de Procedimientos IT",
            "MAN-005",
            category(3, "Tecnología", "tecnologia"),
            "En Revisión",
        ),
        "organigrama-general" => (
            "Organigrama General",
            "ORG-001",
            category(4, "Estructura", "estructura"),
            "Borrador",
        ),
        _ => ("Documento de Prueba", "DOC-999", category(1, "Recursos Humanos", "rrhh"), ""),
    };

    let (approved_by, approved_at, rejection_reason) = match status {
        "approved" => (
            json!({"id": 7, "username": "jperez", "email": "jperez@icasa.example",
                   "first_name": "Juan", "last_name": "Pérez", "full_name": "Juan Pérez"}),
            json!("2024-03-02T11:00:00Z"),
            Value::Null,
        ),
        "rejected" => (Value::Null, Value::Null, json!("Falta la firma del director")),
        _ => (Value::Null, Value::Null, Value::Null),
    };

    json!({
        "id": 100,
        "title": title,
        "slug": slug,
        "category": category_value,
        "content": "Contenido del documento",
        "summary": "Resumen",
        "tags": ["icasa"],
        "document_code": code,
        "effective_date": "2024-03-01",
        "version": 1,
        "status": status,
        "status_display": display,
        "is_public": true,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T12:00:00Z",
        "approved_by": approved_by,
        "approved_at": approved_at,
        "rejection_reason": rejection_reason
    })
}

/// Body the backend echoes after a document create or update: the written
/// fields only, with the category as an id
pub fn document_write(input: &Value) -> Value {
    let field = |key: &str, default: Value| input.get(key).cloned().unwrap_or(default);
    json!({
        "title": field("title", json!("")),
        "category": field("category", json!(4)),
        "template": null,
        "content": field("content", json!("")),
        "summary": field("summary", json!("")),
        "tags": field("tags", json!([])),
        "document_code": field("document_code", json!("")),
        "effective_date": field("effective_date", Value::Null),
        "review_date": null,
        "is_public": field("is_public", json!(false)),
        "requires_acknowledgment": false,
        "auto_save_enabled": true,
        "version_notes": ""
    })
}

pub fn documents() -> Vec<Value> {
    vec![
        document("politica-de-vacaciones", "approved"),
        document("manual-it", "review"),
        document("organigrama-general", "draft"),
    ]
}
