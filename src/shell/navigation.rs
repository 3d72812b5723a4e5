//! Static navigation configuration

use serde::Serialize;

/// One entry of the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display name
    pub name: &'static str,
    /// Route path
    pub href: &'static str,
    /// Icon token
    pub icon: &'static str,
}

/// Sidebar navigation, in display order
pub static NAVIGATION: [NavEntry; 7] = [
    NavEntry { name: "Dashboard", href: "/", icon: "home" },
    NavEntry { name: "Base de Conocimiento", href: "/knowledge", icon: "book-open" },
    NavEntry { name: "Categorías", href: "/categories", icon: "folder-tree" },
    NavEntry { name: "Documentos", href: "/documents", icon: "file-text" },
    NavEntry { name: "Organigrama", href: "/organizational", icon: "users" },
    NavEntry { name: "Reportes", href: "/reports", icon: "bar-chart" },
    NavEntry { name: "Configuración", href: "/settings", icon: "settings" },
];

impl NavEntry {
    /// An entry is active only on an exact path match
    pub fn is_active(&self, pathname: &str) -> bool {
        self.href == pathname
    }
}

/// Look up the entry for a route path
pub fn find_entry(href: &str) -> Option<&'static NavEntry> {
    NAVIGATION.iter().find(|e| e.href == href)
}
