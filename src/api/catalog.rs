//! Catalog Endpoints
//!
//! Category → item → type → description hierarchy.

use reqwest::Method;
use serde::Serialize;

use super::{accepted, ApiClient, ApiError};
use crate::config::{query_value, segment};
use crate::models::{CatalogItem, Category, Description, WorkType};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CategoryArgs<'a> {
    pub category_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct ItemArgs<'a> {
    pub category_id: &'a str,
    pub item_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct TypeArgs<'a> {
    pub category_id: &'a str,
    pub item_id: &'a str,
    pub type_name: &'a str,
    pub status: &'a str,
}

/// Create and update share one payload; the backend keys the text as
/// `description` but lists it back as `description_name`.
#[derive(Serialize)]
pub struct DescriptionArgs<'a> {
    pub description: &'a str,
    pub category_id: &'a str,
    pub item_id: &'a str,
    pub type_id: &'a str,
    pub status: &'a str,
}

pub fn items_for_category_path(category_id: &str) -> String {
    format!("/api/items/{}", segment(category_id))
}

pub fn types_filter_path(category_id: &str, item_id: &str) -> String {
    format!(
        "/api/types/filter?category_id={}&item_id={}",
        query_value(category_id),
        query_value(item_id)
    )
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("/api/category").await
    }

    pub async fn create_category(&self, args: &CategoryArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/category", args).await.map(|_| ())
    }

    pub async fn update_category(&self, id: &str, args: &CategoryArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/category/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/category/{}", segment(id))).await?).map(|_| ())
    }

    pub async fn list_items(&self) -> Result<Vec<CatalogItem>, ApiError> {
        self.get_list("/api/items").await
    }

    /// Dependent option list for the item select
    pub async fn items_for_category(&self, category_id: &str) -> Result<Vec<CatalogItem>, ApiError> {
        self.get_list(&items_for_category_path(category_id)).await
    }

    pub async fn create_item(&self, args: &ItemArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/items", args).await.map(|_| ())
    }

    pub async fn update_item(&self, id: &str, args: &ItemArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/items/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/items/{}", segment(id))).await?).map(|_| ())
    }

    pub async fn list_types(&self) -> Result<Vec<WorkType>, ApiError> {
        self.get_list("/api/types").await
    }

    /// Dependent option list for the type select
    pub async fn types_for_item(&self, category_id: &str, item_id: &str) -> Result<Vec<WorkType>, ApiError> {
        self.get_list(&types_filter_path(category_id, item_id)).await
    }

    pub async fn create_type(&self, args: &TypeArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/types", args).await.map(|_| ())
    }

    pub async fn update_type(&self, id: &str, args: &TypeArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/types/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_type(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/types/{}", segment(id))).await?).map(|_| ())
    }

    pub async fn list_descriptions(&self) -> Result<Vec<Description>, ApiError> {
        self.get_list("/api/description").await
    }

    pub async fn create_description(&self, args: &DescriptionArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/description", args).await.map(|_| ())
    }

    pub async fn update_description(&self, id: &str, args: &DescriptionArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/description/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_description(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/description/{}", segment(id))).await?).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dependent_list_paths() {
        assert_eq!(items_for_category_path("C1"), "/api/items/C1");
        assert_eq!(types_filter_path("C1", "I 2"), "/api/types/filter?category_id=C1&item_id=I%202");
    }

    #[test]
    fn test_description_payload_uses_description_key() {
        let args = DescriptionArgs {
            description: "Replace valve",
            category_id: "1",
            item_id: "2",
            type_id: "3",
            status: "Active",
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["description"], json!("Replace valve"));
        assert!(value.get("description_name").is_none());
    }
}
