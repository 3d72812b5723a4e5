//! Dashboard page data
//!
//! The dashboard shows headline stat cards, the most recently updated
//! documents, quick actions and a recent-activity feed. Figures come either
//! from built-in example data (`sample`) or from the backend (`live`).

mod live;

use chrono::Duration;
use serde::Serialize;

use crate::models::{DashboardStats, DocumentStatus};

pub use live::load_live;

/// Direction of a stat change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
}

/// Headline figure card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub name: String,
    pub value: String,
    /// Change since the previous period; empty when unknown
    pub change: String,
    pub change_type: ChangeType,
    pub icon: &'static str,
}

impl StatCard {
    fn new(name: &str, value: impl ToString, change: &str, change_type: ChangeType, icon: &'static str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            change_type,
            icon,
        }
    }
}

/// Row of the recent documents card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentDocument {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub category: String,
    pub status: DocumentStatus,
    pub status_label: &'static str,
    pub badge_class: String,
    /// Human-readable age of the last update, e.g. `2 horas`
    pub updated: String,
    /// Detail page link, when the document exists in the backend
    pub href: Option<String>,
}

impl RecentDocument {
    fn new(id: i64, title: &str, code: &str, category: &str, status: DocumentStatus, updated: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            code: code.to_string(),
            category: category.to_string(),
            status,
            status_label: status.label(),
            badge_class: status.badge_class(),
            updated: updated.to_string(),
            href: None,
        }
    }
}

/// Button of the quick actions card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    /// Button style: primary, secondary or outline
    pub style: &'static str,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub actor: Option<String>,
    pub action: String,
    pub subject: String,
    pub suffix: String,
    /// e.g. `Hace 30 minutos`
    pub when: String,
    /// Dot color: primary, warning or light
    pub tone: &'static str,
}

impl ActivityItem {
    fn new(actor: Option<&str>, action: &str, subject: &str, suffix: &str, when: &str, tone: &'static str) -> Self {
        Self {
            actor: actor.map(str::to_string),
            action: action.to_string(),
            subject: subject.to_string(),
            suffix: suffix.to_string(),
            when: when.to_string(),
            tone,
        }
    }
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: Vec<StatCard>,
    pub recent_documents: Vec<RecentDocument>,
    pub quick_actions: Vec<QuickAction>,
    pub activity: Vec<ActivityItem>,
}

const TITLE: &str = "Dashboard Ejecutivo";
const SUBTITLE: &str = "Resumen general del Sistema de Gestión Estratégica Organizacional";

impl Dashboard {
    /// Built-in example figures
    pub fn sample() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            stats: vec![
                StatCard::new("Total Documentos", "156", "+12%", ChangeType::Positive, "file-text"),
                StatCard::new("Pendientes Aprobación", "8", "-2", ChangeType::Negative, "clock"),
                StatCard::new("Categorías Activas", "24", "+3", ChangeType::Positive, "folder-tree"),
                StatCard::new("Usuarios Activos", "45", "+5%", ChangeType::Positive, "users"),
            ],
            recent_documents: vec![
                RecentDocument::new(1, "Política de Vacaciones", "POL-001", "Recursos Humanos", DocumentStatus::Approved, "2 horas"),
                RecentDocument::new(2, "Manual de Procedimientos IT", "MAN-005", "Tecnología", DocumentStatus::Review, "1 día"),
                RecentDocument::new(3, "Organigrama General", "ORG-001", "Estructura", DocumentStatus::Draft, "3 días"),
            ],
            quick_actions: quick_actions(),
            activity: vec![
                ActivityItem::new(Some("Juan Pérez"), "aprobó el documento", "Política de Seguridad", "", "Hace 30 minutos", "primary"),
                ActivityItem::new(Some("María García"), "envió para revisión", "Manual de Calidad", "", "Hace 2 horas", "warning"),
                ActivityItem::new(None, "Nueva categoría", "Compliance", "creada", "Hace 1 día", "light"),
            ],
        }
    }
}

fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction { label: "Crear Nuevo Documento", icon: "file-text", href: "/documents", style: "primary" },
        QuickAction { label: "Agregar Categoría", icon: "folder-tree", href: "/categories", style: "secondary" },
        QuickAction { label: "Revisar Pendientes", icon: "check-circle", href: "/documents?status=review", style: "outline" },
    ]
}

/// Stat cards for figures fetched from the backend
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard::new("Total Documentos", stats.total_documents, "", ChangeType::Positive, "file-text"),
        StatCard::new("Pendientes Aprobación", stats.pending_approval, "", ChangeType::Negative, "clock"),
        StatCard::new("Categorías Activas", stats.total_categories, "", ChangeType::Positive, "folder-tree"),
        StatCard::new("Actividad Reciente", stats.recent_activity, "", ChangeType::Positive, "trending-up"),
    ]
}

/// Spanish human-readable age, e.g. `30 minutos`, `1 día`
pub fn relative_age(age: Duration) -> String {
    fn plural(n: i64, one: &str, many: &str) -> String {
        if n == 1 {
            format!("1 {}", one)
        } else {
            format!("{} {}", n, many)
        }
    }

    if age < Duration::minutes(1) {
        "unos segundos".to_string()
    } else if age < Duration::hours(1) {
        plural(age.num_minutes(), "minuto", "minutos")
    } else if age < Duration::days(1) {
        plural(age.num_hours(), "hora", "horas")
    } else {
        plural(age.num_days(), "día", "días")
    }
}
