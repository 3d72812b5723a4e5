//! Document endpoints

use super::{encode_slug, ApiClient, ClientError};
use crate::models::{
    ActionResponse, ApiResponse, Document, DocumentInput, DocumentQuery, DocumentWrite,
    RejectRequest,
};

const DOCUMENTS_PATH: &str = "/knowledge/documents/";

/// Document endpoints of the knowledge base
#[derive(Debug, Clone, Copy)]
pub struct DocumentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /knowledge/documents/ - Paginated document list
    ///
    /// Filters left unset in `query` are not sent.
    pub async fn get_all(&self, query: &DocumentQuery) -> Result<ApiResponse<Document>, ClientError> {
        if query.is_empty() {
            self.client.get(DOCUMENTS_PATH).await
        } else {
            self.client.get_with_query(DOCUMENTS_PATH, query).await
        }
    }

    /// GET /knowledge/documents/{slug}/ - Single document
    pub async fn get_by_slug(&self, slug: &str) -> Result<Document, ClientError> {
        self.client.get(&detail_path(slug)).await
    }

    /// POST /knowledge/documents/ - Create a document
    ///
    /// The backend echoes the written fields, not the full document.
    pub async fn create(&self, input: &DocumentInput) -> Result<DocumentWrite, ClientError> {
        self.client.post(DOCUMENTS_PATH, input).await
    }

    /// PUT /knowledge/documents/{slug}/ - Update a document
    pub async fn update(&self, slug: &str, input: &DocumentInput) -> Result<DocumentWrite, ClientError> {
        self.client.put(&detail_path(slug), input).await
    }

    /// DELETE /knowledge/documents/{slug}/ - Delete a document
    pub async fn delete(&self, slug: &str) -> Result<(), ClientError> {
        self.client.delete(&detail_path(slug)).await
    }

    /// POST /knowledge/documents/{slug}/approve/ - Approve a document under review
    pub async fn approve(&self, slug: &str) -> Result<ActionResponse, ClientError> {
        self.client
            .post_empty(&format!("{}approve/", detail_path(slug)))
            .await
    }

    /// POST /knowledge/documents/{slug}/reject/ - Reject a document under review
    pub async fn reject(&self, slug: &str, reason: &str) -> Result<ActionResponse, ClientError> {
        let body = RejectRequest {
            reason: reason.to_string(),
        };
        self.client
            .post(&format!("{}reject/", detail_path(slug)), &body)
            .await
    }
}

fn detail_path(slug: &str) -> String {
    format!("{}{}/", DOCUMENTS_PATH, encode_slug(slug))
}
