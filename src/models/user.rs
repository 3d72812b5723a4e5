//! User model
//!
//! Users are only displayed by the dashboard (authors, approvers); this crate
//! never creates or mutates them.

use serde::{Deserialize, Serialize};

/// User as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Full name as computed by the backend
    #[serde(default)]
    pub full_name: String,
}

impl User {
    /// Name to show in the UI, falling back to the username
    pub fn display_name(&self) -> &str {
        let full = self.full_name.trim();
        if full.is_empty() {
            &self.username
        } else {
            full
        }
    }

    /// Single-letter avatar initial
    pub fn initial(&self) -> Option<char> {
        self.display_name().chars().next().map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: &str) -> User {
        User {
            id: 1,
            username: "jperez".to_string(),
            email: "jperez@icasa.example".to_string(),
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            full_name: full_name.to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user("Juan Pérez").display_name(), "Juan Pérez");
        assert_eq!(user("Juan Pérez").initial(), Some('J'));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user("   ").display_name(), "jperez");
    }

    #[test]
    fn test_deserialize_minimal_user() {
        let user: User = serde_json::from_str(r#"{"id": 3, "username": "admin"}"#).unwrap();
        assert_eq!(user.display_name(), "admin");
        assert_eq!(user.email, "");
    }
}
