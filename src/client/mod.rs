//! Knowledge base REST client
//!
//! Thin typed wrapper over the backend's `/api/v1` surface. Every operation
//! maps to exactly one HTTP request:
//! - `categories()` - category CRUD and the category tree
//! - `documents()` - document CRUD plus the approve/reject workflow actions
//!
//! There is no retry, caching or request de-duplication. Every failure is
//! logged once and handed back to the caller unchanged.

mod categories;
mod documents;
mod error;


use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BackendConfig;

pub use categories::CategoriesApi;
pub use documents::DocumentsApi;
pub use error::ClientError;

/// HTTP client bound to one knowledge base backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api/v1`
    base_url: String,
}

impl ApiClient {
    /// Create a client from backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client for a base URL with no timeout
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&BackendConfig {
            base_url: base_url.into(),
            timeout_seconds: None,
        })
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Category endpoints
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    /// Document endpoints
    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Method::GET, path, |req| req).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.call(Method::GET, path, |req| req.query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, |req| req.json(body)).await
    }

    /// POST without a request body
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Method::POST, path, |req| req).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, path, |req| req.json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path);
        let result = self.send(self.http.delete(&url)).await.map(drop);
        intercept(&Method::DELETE, &url, result)
    }

    /// Send a request and decode its JSON body, logging any failure
    async fn call<T, F>(&self, method: Method, path: &str, build: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        let request = build(self.http.request(method.clone(), &url));

        let result = match self.send(request).await {
            Ok(response) => decode(response).await,
            Err(e) => Err(e),
        };
        intercept(&method, &url, result)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Log a failed call and pass the result through unchanged
fn intercept<T>(method: &Method, url: &str, result: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(ref e) = result {
        tracing::error!(method = %method, url = %url, status = ?e.status(), "API error: {}", e);
    }
    result
}

fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ClientError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed.to_string())
}

/// Encode a slug as a single path segment
pub(crate) fn encode_slug(slug: &str) -> String {
    urlencoding::encode(slug).into_owned()
}
