//! Category model
//!
//! Categories are the hierarchical classification nodes of the knowledge base.
//! The backend serves them with their children nested inline, so a single
//! `Category` value is a whole subtree.

use serde::{Deserialize, Serialize};

/// Category node as served by the knowledge base API.
///
/// The tree endpoint only sends `id`, `name`, `slug`, `icon`, `color` and
/// `children` (and only active nodes), so the remaining fields default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier
    pub id: i64,
    /// Category name
    pub name: String,
    /// URL-friendly slug (unique)
    pub slug: String,
    /// Category description
    #[serde(default)]
    pub description: String,
    /// Icon token
    #[serde(default)]
    pub icon: String,
    /// Color token
    #[serde(default)]
    pub color: String,
    /// Whether the category is active
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Child categories, in display order
    #[serde(default)]
    pub children: Vec<Category>,
}

fn default_active() -> bool {
    true
}

impl Category {
    /// Create a leaf category with empty description and tokens.
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            is_active: true,
            children: Vec::new(),
        }
    }

    /// Attach children to this category
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children;
        self
    }

    /// Check if this category has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the total count of this category and all descendants
    pub fn total_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.total_count()).sum::<usize>()
    }

    /// Flatten the tree into a list of categories (depth-first, pre-order)
    pub fn flatten(&self) -> Vec<&Category> {
        let mut result = vec![self];
        for child in &self.children {
            result.extend(child.flatten());
        }
        result
    }

    /// Find a category by slug in this subtree (depth-first)
    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        if self.slug == slug {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_slug(slug))
    }
}

/// Count every node of a forest of categories
pub fn count_tree(roots: &[Category]) -> usize {
    roots.iter().map(Category::total_count).sum()
}

/// Find a category by slug in a forest of categories
pub fn find_in_tree<'a>(roots: &'a [Category], slug: &str) -> Option<&'a Category> {
    roots.iter().find_map(|c| c.find_by_slug(slug))
}

/// Partial category used for create and update requests.
///
/// Only the fields that are set are sent to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Parent category ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
}

impl CategoryInput {
    /// Create an input carrying only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the parent category
    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Category {
        Category::new(1, "Manual de Organización", "manual").with_children(vec![
            Category::new(2, "Recursos Humanos", "rrhh")
                .with_children(vec![Category::new(3, "Políticas", "politicas")]),
            Category::new(4, "Tecnología", "tecnologia"),
        ])
    }

    #[test]
    fn test_category_new() {
        let category = Category::new(7, "Compliance", "compliance");

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Compliance");
        assert_eq!(category.slug, "compliance");
        assert!(category.is_active);
        assert!(category.is_leaf());
    }

    #[test]
    fn test_total_count() {
        assert_eq!(sample_tree().total_count(), 4);
    }

    #[test]
    fn test_flatten_is_depth_first() {
        let tree = sample_tree();
        let ids: Vec<i64> = tree.flatten().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_find_by_slug() {
        let tree = sample_tree();

        assert_eq!(tree.find_by_slug("politicas").map(|c| c.id), Some(3));
        assert_eq!(tree.find_by_slug("manual").map(|c| c.id), Some(1));
        assert!(tree.find_by_slug("missing").is_none());
    }

    #[test]
    fn test_forest_helpers() {
        let forest = vec![sample_tree(), Category::new(9, "Estructura", "estructura")];

        assert_eq!(count_tree(&forest), 5);
        assert_eq!(find_in_tree(&forest, "estructura").map(|c| c.id), Some(9));
        assert_eq!(find_in_tree(&forest, "tecnologia").map(|c| c.id), Some(4));
    }

    #[test]
    fn test_deserialize_tree_node_with_missing_fields() {
        let json = r##"{
            "id": 1,
            "name": "Manual",
            "slug": "manual",
            "icon": "book",
            "color": "#2E7D32",
            "children": [{"id": 2, "name": "RRHH", "slug": "rrhh", "icon": "", "color": "", "children": []}]
        }"##;

        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.description, "");
        assert!(category.is_active);
        assert_eq!(category.children.len(), 1);
        assert_eq!(category.children[0].slug, "rrhh");
    }

    #[test]
    fn test_deserialize_ignores_extra_backend_fields() {
        let json = r#"{
            "id": 5, "name": "Calidad", "slug": "calidad", "description": "Normas",
            "icon": "check", "color": "blue", "is_active": false, "children": [],
            "parent": 1, "order": 3, "document_count": 12, "level": 1,
            "breadcrumb": [{"name": "Calidad", "slug": "calidad"}]
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.description, "Normas");
        assert!(!category.is_active);
    }

    #[test]
    fn test_input_skips_unset_fields() {
        let input = CategoryInput::new("Compliance").with_parent(1);
        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(value, serde_json::json!({"name": "Compliance", "parent": 1}));
    }
}
