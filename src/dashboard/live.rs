//! Dashboard figures fetched from the knowledge base backend

use chrono::{DateTime, Duration, Utc};

use super::{quick_actions, relative_age, stat_cards, ActivityItem, Dashboard, RecentDocument, SUBTITLE, TITLE};
use crate::client::{ApiClient, ClientError};
use crate::models::{count_tree, DashboardStats, Document, DocumentQuery, DocumentStatus};

/// Window counted as recent activity
const ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Build the dashboard from the backend.
///
/// Issues three requests: the document list, the documents under review and
/// the category tree. Any failure is returned as is.
pub async fn load_live(client: &ApiClient, recent_limit: usize) -> Result<Dashboard, ClientError> {
    let documents = client.documents().get_all(&DocumentQuery::default()).await?;
    let pending = client
        .documents()
        .get_all(&DocumentQuery::default().with_status(DocumentStatus::Review))
        .await?;
    let tree = client.categories().get_tree().await?;

    let now = Utc::now();
    let mut recent: Vec<&Document> = documents.results.iter().collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent.truncate(recent_limit);

    let stats = DashboardStats {
        total_documents: documents.count,
        pending_approval: pending.count,
        total_categories: count_tree(&tree) as u64,
        recent_activity: documents
            .results
            .iter()
            .filter(|d| now - d.updated_at < Duration::days(ACTIVITY_WINDOW_DAYS))
            .count() as u64,
    };
    tracing::debug!(?stats, "Dashboard figures loaded from backend");

    Ok(Dashboard {
        title: TITLE,
        subtitle: SUBTITLE,
        stats: stat_cards(&stats),
        recent_documents: recent.iter().map(|d| recent_document(d, now)).collect(),
        quick_actions: quick_actions(),
        activity: recent.iter().map(|d| activity_item(d, now)).collect(),
    })
}

fn recent_document(doc: &Document, now: DateTime<Utc>) -> RecentDocument {
    RecentDocument {
        id: doc.id,
        title: doc.title.clone(),
        code: doc.document_code.clone(),
        category: doc.category.name.clone(),
        status: doc.status,
        status_label: doc.status.label(),
        badge_class: doc.status.badge_class(),
        updated: relative_age(now - doc.updated_at),
        href: Some(format!("/documents/{}", urlencoding::encode(&doc.slug))),
    }
}

fn activity_item(doc: &Document, now: DateTime<Utc>) -> ActivityItem {
    let (action, tone) = match doc.status {
        DocumentStatus::Draft => ("Borrador actualizado", "light"),
        DocumentStatus::Review => ("Enviado para revisión", "warning"),
        DocumentStatus::Approved => ("Documento aprobado", "primary"),
        DocumentStatus::Rejected => ("Documento rechazado", "warning"),
    };

    ActivityItem {
        actor: None,
        action: action.to_string(),
        subject: doc.title.clone(),
        suffix: String::new(),
        when: format!("Hace {}", relative_age(now - doc.updated_at)),
        tone,
    }
}
