//! Document model
//!
//! This module provides:
//! - `Document` entity as served by the knowledge base API
//! - `DocumentStatus` enum for the approval workflow
//! - Input and query types for the document endpoints
//! - `DocumentWrite`, the body echoed back by create and update

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, User};

/// Document entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier
    pub id: i64,
    /// Document title
    pub title: String,
    /// URL-friendly slug
    pub slug: String,
    /// Owning category
    pub category: Category,
    /// Content body (absent from list responses)
    #[serde(default)]
    pub content: String,
    /// Short summary
    #[serde(default)]
    pub summary: String,
    /// Tags, unordered
    #[serde(default)]
    pub tags: Vec<String>,
    /// Human-readable document code, e.g. `POL-001`
    #[serde(default)]
    pub document_code: String,
    /// Date the document takes effect
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    /// Version counter
    #[serde(default = "default_version")]
    pub version: i32,
    /// Workflow status
    pub status: DocumentStatus,
    /// Display label for the status, as sent by the backend
    #[serde(default)]
    pub status_display: String,
    /// Whether the document is publicly visible
    #[serde(default)]
    pub is_public: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Approver, only sent on the detail endpoint once approved
    #[serde(default)]
    pub approved_by: Option<User>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    /// Reason given on rejection
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

fn default_version() -> i32 {
    1
}

impl Document {
    /// Status label, preferring the backend's display string
    pub fn status_label(&self) -> &str {
        if self.status_display.is_empty() {
            self.status.label()
        } else {
            &self.status_display
        }
    }
}

/// Document workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Draft, still being written
    #[default]
    Draft,
    /// Submitted and waiting for approval
    Review,
    /// Approved and in force
    Approved,
    /// Rejected by an approver
    Rejected,
}

impl DocumentStatus {
    /// All statuses in workflow order
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Draft,
        DocumentStatus::Review,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Review => "review",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    /// Spanish display label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Borrador",
            DocumentStatus::Review => "En Revisión",
            DocumentStatus::Approved => "Aprobado",
            DocumentStatus::Rejected => "Rechazado",
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(&self) -> String {
        format!("badge-{}", self.as_str())
    }

    /// Only documents under review can be approved or rejected
    pub fn awaits_decision(&self) -> bool {
        *self == DocumentStatus::Review
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(DocumentStatus::Draft),
            "review" => Ok(DocumentStatus::Review),
            "approved" => Ok(DocumentStatus::Approved),
            "rejected" => Ok(DocumentStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid document status: {}", s)),
        }
    }
}

/// Partial document used for create and update requests.
///
/// Only the fields that are set are sent to the backend. The category is
/// referenced by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Category ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl DocumentInput {
    /// Create an input carrying a title and a category
    pub fn new(title: impl Into<String>, category: i64) -> Self {
        Self {
            title: Some(title.into()),
            category: Some(category),
            ..Self::default()
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the document code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.document_code = Some(code.into());
        self
    }

    /// Set the effective date
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Check if any field is set
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.category.is_some()
            || self.content.is_some()
            || self.summary.is_some()
            || self.tags.is_some()
            || self.document_code.is_some()
            || self.effective_date.is_some()
            || self.is_public.is_some()
    }
}

/// Document as echoed back by create and update.
///
/// The backend answers writes with the submitted fields only: the category is
/// an id and there is no slug, status or timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentWrite {
    #[serde(default)]
    pub title: String,
    /// Category ID
    #[serde(default)]
    pub category: Option<i64>,
    /// Template ID
    #[serde(default)]
    pub template: Option<i64>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub document_code: String,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    #[serde(default)]
    pub review_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub requires_acknowledgment: bool,
    #[serde(default)]
    pub auto_save_enabled: bool,
    #[serde(default)]
    pub version_notes: String,
}

/// Optional filters for the document list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentQuery {
    /// Category slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

impl DocumentQuery {
    /// Restrict to a category slug
    pub fn in_category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    /// Restrict to a search term
    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restrict to a status
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Drop filters that are blank, as submitted by an empty search form
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            category: non_blank(self.category),
            search: non_blank(self.search),
            status: self.status,
        }
    }

    /// Check if no filter is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none() && self.status.is_none()
    }
}

/// Body of the reject action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectRequest {
    pub reason: String,
}

/// Body returned by the approve and reject actions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}
