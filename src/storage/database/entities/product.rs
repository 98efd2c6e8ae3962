use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Unit price, double precision
    pub price: f64,

    #[sea_orm(nullable)]
    pub img_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_category::Entity")]
    ProductCategory,

    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategory.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_category::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain product, attaching the given categories ordered by id
    pub fn to_domain_product(
        &self,
        categories: Vec<super::category::Model>,
    ) -> crate::core::models::Product {
        let mut categories: Vec<_> = categories
            .into_iter()
            .map(|c| c.to_domain_category())
            .collect();
        categories.sort_by_key(|c| c.id);

        crate::core::models::Product {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            img_url: self.img_url.clone(),
            categories,
        }
    }
}
