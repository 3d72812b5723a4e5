//! Sidebar view state
//!
//! The collapse flag lives in the query string (`?sidebar=collapsed`), so it
//! is scoped to one rendered view and carried along by the sidebar's own links.
//! The toggle link also keeps the view's other query parameters, so flipping
//! the sidebar on a filtered list keeps the filters.

use serde::Serialize;

use super::navigation::NAVIGATION;
use crate::config::SiteConfig;

/// Query value that marks the sidebar as collapsed
pub const COLLAPSED_PARAM: &str = "collapsed";

/// Parameters the toggle link never carries over
const DROPPED_PARAMS: [&str; 2] = ["sidebar", "notice"];

/// Sidebar state for one rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pathname: String,
    collapsed: bool,
    /// Other query parameters of the view, re-encoded
    preserved: String,
}

/// Sidebar navigation link ready for rendering
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SidebarLink {
    pub name: &'static str,
    pub href: String,
    pub icon: &'static str,
    pub active: bool,
    /// Tooltip, only set while collapsed since the label is hidden then
    pub title: Option<&'static str>,
}

/// Everything the shell template needs
#[derive(Debug, Clone, Serialize)]
pub struct SidebarView {
    pub brand_name: String,
    pub brand_subtitle: String,
    pub brand_initial: String,
    pub user_name: String,
    pub user_role: String,
    pub user_initial: String,
    pub collapsed: bool,
    pub toggle_label: &'static str,
    pub toggle_href: String,
    pub links: Vec<SidebarLink>,
}

impl Sidebar {
    pub fn new(pathname: impl Into<String>, collapsed: bool) -> Self {
        Self {
            pathname: pathname.into(),
            collapsed,
            preserved: String::new(),
        }
    }

    /// Keep the view's query parameters on the toggle link
    pub fn with_query(mut self, raw: &str) -> Self {
        self.preserved = raw
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode_component(key);
                if key.is_empty() || DROPPED_PARAMS.contains(&key.as_str()) {
                    return None;
                }
                let value = decode_component(value);
                Some(format!(
                    "{}={}",
                    urlencoding::encode(&key),
                    urlencoding::encode(&value)
                ))
            })
            .collect::<Vec<_>>()
            .join("&");
        self
    }

    /// Build from the raw `sidebar` query value
    pub fn from_query(pathname: impl Into<String>, sidebar: Option<&str>) -> Self {
        Self::new(pathname, sidebar == Some(COLLAPSED_PARAM))
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Flip the collapse flag
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Arrow shown on the collapse button
    pub fn toggle_label(&self) -> &'static str {
        if self.collapsed {
            "→"
        } else {
            "←"
        }
    }

    /// Link to `path` that keeps the current collapse state
    pub fn href_for(&self, path: &str) -> String {
        with_flag(path, self.collapsed)
    }

    /// Link to the current view with the collapse flag flipped
    pub fn toggle_href(&self) -> String {
        if self.preserved.is_empty() {
            return with_flag(&self.pathname, !self.collapsed);
        }
        let mut href = format!("{}?{}", self.pathname, self.preserved);
        if !self.collapsed {
            href.push_str("&sidebar=");
            href.push_str(COLLAPSED_PARAM);
        }
        href
    }

    /// One link per configured route
    pub fn links(&self) -> Vec<SidebarLink> {
        NAVIGATION
            .iter()
            .map(|entry| SidebarLink {
                name: entry.name,
                href: self.href_for(entry.href),
                icon: entry.icon,
                active: entry.is_active(&self.pathname),
                title: self.collapsed.then_some(entry.name),
            })
            .collect()
    }

    pub fn view(&self, site: &SiteConfig) -> SidebarView {
        SidebarView {
            brand_name: site.name.clone(),
            brand_subtitle: site.subtitle.clone(),
            brand_initial: initial(&site.name),
            user_name: site.user_name.clone(),
            user_role: site.user_role.clone(),
            user_initial: initial(&site.user_name),
            collapsed: self.collapsed,
            toggle_label: self.toggle_label(),
            toggle_href: self.toggle_href(),
            links: self.links(),
        }
    }
}

fn with_flag(path: &str, collapsed: bool) -> String {
    if collapsed {
        format!("{}?sidebar={}", path, COLLAPSED_PARAM)
    } else {
        path.to_string()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn initial(text: &str) -> String {
    text.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
