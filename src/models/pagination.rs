//! Paginated response envelope
//!
//! List endpoints of the backend wrap their results in a page envelope with
//! the total count and links to the neighbouring pages.

use serde::{Deserialize, Serialize};

/// Paginated list envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Link to the next page
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Items in the current page
    pub results: Vec<T>,
}

impl<T> ApiResponse<T> {
    /// Wrap a single page holding every result
    pub fn single_page(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    /// Check if there is a next page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Check if there is a previous page
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Check if the current page is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get the number of items in the current page
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}
