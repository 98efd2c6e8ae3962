//! Catalog service: categories, product lookups and admin product writes

use crate::core::dto::{CategoryDto, ProductDto, ProductMinDto};
use crate::core::models::{Product, ProductKey};
use crate::core::pagination::{Page, PageRequest};
use crate::storage::Database;
use crate::utils::error::{Result, ShopError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Arc<Database>,
}

impl CatalogService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All categories ordered by id
    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>> {
        let categories = self.db.list_categories().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn products_by_category(
        &self,
        category_id: i64,
        request: &PageRequest,
    ) -> Result<Page<ProductMinDto>> {
        let page = self.db.products_by_category(category_id, request).await?;
        Ok(page.map(ProductMinDto::from))
    }

    pub async fn find_product(&self, product_id: i64) -> Result<ProductDto> {
        self.db
            .find_product(product_id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| ShopError::resource_not_found(product_id))
    }

    /// Case-insensitive name search
    pub async fn search_products(&self, name: &str, request: &PageRequest) -> Result<Page<ProductMinDto>> {
        let page = self
            .db
            .search_products_by_name(name.trim(), request)
            .await?;
        Ok(page.map(ProductMinDto::from))
    }

    /// Search by category membership and name.
    ///
    /// `category_ids` is `"0"` for no filter or a comma separated id list. The
    /// page is computed over distinct (id, name) pairs first, then the full
    /// products for exactly those ids are loaded and put back in page order.
    pub async fn search_products_with_categories(
        &self,
        category_ids: &str,
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<ProductDto>> {
        let category_ids = parse_category_ids(category_ids)?;
        let name = name.trim();
        debug!("Searching products in categories {:?} named {:?}", category_ids, name);

        let keys = self
            .db
            .search_product_keys(&category_ids, name, request)
            .await?;

        let ids: Vec<i64> = keys.content.iter().map(|k| k.id).collect();
        let products = self.db.find_products_with_categories(&ids).await?;
        let ordered = order_like_keys(&keys.content, products);

        Ok(keys.with_content(ordered.into_iter().map(ProductDto::from).collect()))
    }

    pub async fn insert_product(&self, dto: ProductDto) -> Result<ProductDto> {
        dto.validate()?;
        let product = self.db.create_product(dto.into_draft()).await?;
        info!("Product {} created", product.id);
        Ok(product.into())
    }

    pub async fn update_product(&self, product_id: i64, dto: ProductDto) -> Result<ProductDto> {
        dto.validate()?;
        let product = self.db.update_product(product_id, dto.into_draft()).await?;
        info!("Product {} updated", product.id);
        Ok(product.into())
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        self.db.delete_product(product_id).await?;
        info!("Product {} deleted", product_id);
        Ok(())
    }
}

/// Parse the `categoryIds` query value; `"0"` and blank mean every category
fn parse_category_ids(raw: &str) -> Result<Vec<i64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" {
        return Ok(vec![]);
    }

    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| ShopError::field("categoryIds", format!("Invalid category id: {}", part)))
        })
        .collect()
}

/// Arrange `products` in the order of `keys`, dropping ids with no product
fn order_like_keys(keys: &[ProductKey], products: Vec<Product>) -> Vec<Product> {
    let mut by_id: HashMap<i64, Product> = products.into_iter().map(|p| (p.id, p)).collect();
    keys.iter().filter_map(|k| by_id.remove(&k.id)).collect()
}
