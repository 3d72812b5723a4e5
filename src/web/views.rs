//! Template view models built from backend entities

use serde::Serialize;

use crate::client::encode_slug;
use crate::models::{Document, DocumentQuery, DocumentStatus};

/// Document as listed in tables and category pages
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRow {
    pub title: String,
    pub href: String,
    pub code: String,
    pub category: String,
    pub category_href: String,
    pub version: i32,
    pub status: DocumentStatus,
    pub status_label: String,
    pub updated: String,
}

impl DocumentRow {
    pub fn new(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            href: document_href(&doc.slug),
            code: doc.document_code.clone(),
            category: doc.category.name.clone(),
            category_href: category_href(&doc.category.slug),
            version: doc.version,
            status: doc.status,
            status_label: doc.status_label().to_string(),
            updated: doc.updated_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

/// Document detail page
#[derive(Debug, Clone, Serialize)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub row: DocumentRow,
    pub effective_date: Option<String>,
    pub tags: Vec<String>,
    pub summary: String,
    pub content: String,
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub rejection_reason: Option<String>,
    /// Whether approve/reject are offered
    pub awaits_decision: bool,
}

impl DocumentDetail {
    pub fn new(doc: &Document) -> Self {
        Self {
            row: DocumentRow::new(doc),
            effective_date: doc.effective_date.map(|d| d.format("%d/%m/%Y").to_string()),
            tags: doc.tags.clone(),
            summary: doc.summary.clone(),
            content: doc.content.clone(),
            approved_by: doc.approved_by.as_ref().map(|u| u.display_name().to_string()),
            approved_at: doc.approved_at.map(|t| t.format("%d/%m/%Y %H:%M").to_string()),
            rejection_reason: doc
                .rejection_reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            awaits_decision: doc.status.awaits_decision(),
        }
    }
}

/// Current values of the document list filter form
#[derive(Debug, Clone, Default, Serialize)]
pub struct Filters {
    pub category: String,
    pub search: String,
    pub status: String,
}

impl From<&DocumentQuery> for Filters {
    fn from(query: &DocumentQuery) -> Self {
        Self {
            category: query.category.clone().unwrap_or_default(),
            search: query.search.clone().unwrap_or_default(),
            status: query.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        }
    }
}

/// Option of the status select
#[derive(Debug, Clone, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn status_options() -> Vec<StatusOption> {
    DocumentStatus::ALL
        .iter()
        .map(|s| StatusOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

pub fn document_href(slug: &str) -> String {
    format!("/documents/{}", encode_slug(slug))
}

pub fn category_href(slug: &str) -> String {
    format!("/categories/{}", encode_slug(slug))
}
