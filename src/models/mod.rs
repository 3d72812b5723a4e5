//! Data models
//!
//! Wire-level shapes of the knowledge base REST API:
//! - Categories (hierarchical) and documents (status-tracked)
//! - Users, display only
//! - The paginated list envelope
//! - Request bodies and query filters

mod category;
mod document;
mod pagination;
mod user;

use serde::{Deserialize, Serialize};

pub use category::{count_tree, find_in_tree, Category, CategoryInput};
pub use document::{
    ActionResponse, Document, DocumentInput, DocumentQuery, DocumentStatus, DocumentWrite,
    RejectRequest,
};
pub use pagination::ApiResponse;
pub use user::User;

/// Headline figures of the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_documents: u64,
    pub pending_approval: u64,
    pub total_categories: u64,
    pub recent_activity: u64,
}
