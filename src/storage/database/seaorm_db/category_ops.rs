use crate::core::models::Category;
use crate::utils::error::{Result, ShopError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, category};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// All categories ordered by id
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        debug!("Listing categories");

        let models = entities::Category::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_category()).collect())
    }

    /// Create a category
    pub async fn create_category(&self, name: &str) -> Result<Category> {
        debug!("Creating category: {}", name);

        let model = category::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(ShopError::Database)?;

        Ok(model.to_domain_category())
    }
}
