//! Navigation shell
//!
//! The shell is the page frame every view renders inside: the sidebar with
//! the brand header, one link per configured route and the user section.

mod navigation;
mod sidebar;

pub use navigation::{find_entry, NavEntry, NAVIGATION};
pub use sidebar::{Sidebar, SidebarLink, SidebarView};
