//! Category endpoints

use super::{encode_slug, ApiClient, ClientError};
use crate::models::{ApiResponse, Category, CategoryInput};

const CATEGORIES_PATH: &str = "/knowledge/categories/";

/// Category endpoints of the knowledge base
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /knowledge/categories/ - Paginated category list
    pub async fn get_all(&self) -> Result<ApiResponse<Category>, ClientError> {
        self.client.get(CATEGORIES_PATH).await
    }

    /// GET /knowledge/categories/tree/ - Root categories with nested children
    pub async fn get_tree(&self) -> Result<Vec<Category>, ClientError> {
        self.client.get(&format!("{}tree/", CATEGORIES_PATH)).await
    }

    /// GET /knowledge/categories/{slug}/ - Single category
    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, ClientError> {
        self.client.get(&detail_path(slug)).await
    }

    /// POST /knowledge/categories/ - Create a category
    pub async fn create(&self, input: &CategoryInput) -> Result<Category, ClientError> {
        self.client.post(CATEGORIES_PATH, input).await
    }

    /// PUT /knowledge/categories/{slug}/ - Update a category
    pub async fn update(&self, slug: &str, input: &CategoryInput) -> Result<Category, ClientError> {
        self.client.put(&detail_path(slug), input).await
    }

    /// DELETE /knowledge/categories/{slug}/ - Delete a category
    pub async fn delete(&self, slug: &str) -> Result<(), ClientError> {
        self.client.delete(&detail_path(slug)).await
    }
}

fn detail_path(slug: &str) -> String {
    format!("{}{}/", CATEGORIES_PATH, encode_slug(slug))
}
