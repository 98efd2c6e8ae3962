//! Catalog payloads

use crate::core::models::{Category, Product, ProductDraft};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Full product, used both as the admin request body and the detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(
        length(min = 3, max = 80, message = "Name must have between 3 and 80 characters"),
        custom(function = "super::not_blank", message = "Required field")
    )]
    pub name: String,
    #[validate(
        length(min = 10, message = "Description must have at least 10 characters"),
        custom(function = "super::not_blank", message = "Required field")
    )]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Product must have at least one category"))]
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            category_ids: self.categories.into_iter().map(|c| c.id).collect(),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            categories: product.categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}

/// Product summary used in listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMinDto {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub img_url: Option<String>,
}

impl From<Product> for ProductMinDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            img_url: product.img_url,
        }
    }
}

/// `GET /products` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchQuery {
    #[serde(default)]
    pub name: String,
}

/// `GET /products/categories` query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySearchQuery {
    #[serde(default = "no_category_filter")]
    pub category_ids: String,
    #[serde(default)]
    pub name: String,
}

fn no_category_filter() -> String {
    "0".to_string()
}
