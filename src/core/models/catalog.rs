//! Catalog models

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Product with its categories, ordered by category id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub categories: Vec<Category>,
}

/// Values written on product create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub category_ids: Vec<i64>,
}

/// Row of the distinct id/name search projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductKey {
    pub id: i64,
    pub name: String,
}
