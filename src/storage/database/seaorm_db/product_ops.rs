use crate::core::models::{Product, ProductDraft, ProductKey};
use crate::core::pagination::{Page, PageRequest};
use crate::utils::error::{Result, ShopError};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, category, product, product_category};
use super::types::{SeaOrmDatabase, apply_sort};

/// Distinct id/name projection row
#[derive(Debug, FromQueryResult)]
struct ProductKeyRow {
    id: i64,
    name: String,
}

impl SeaOrmDatabase {
    /// Find product by ID, with categories
    pub async fn find_product(&self, product_id: i64) -> Result<Option<Product>> {
        debug!("Finding product by ID: {}", product_id);

        let rows = entities::Product::find_by_id(product_id)
            .find_with_related(entities::Category)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(model, categories)| model.to_domain_product(categories)))
    }

    /// Page of products whose name contains `name`, ignoring case
    pub async fn search_products_by_name(
        &self,
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<Product>> {
        debug!("Searching products by name: {:?}", name);

        let query = entities::Product::find().filter(
            Expr::expr(Func::upper(Expr::col((
                product::Entity,
                product::Column::Name,
            ))))
            .like(format!("%{}%", name.to_uppercase())),
        );

        self.fetch_product_page(query, request).await
    }

    /// Page of products linked to a category
    pub async fn products_by_category(
        &self,
        category_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Product>> {
        debug!("Listing products of category: {}", category_id);

        let query = entities::Product::find()
            .join(JoinType::InnerJoin, product::Relation::ProductCategory.def())
            .filter(product_category::Column::CategoryId.eq(category_id));

        self.fetch_product_page(query, request).await
    }

    async fn fetch_product_page(
        &self,
        query: Select<entities::Product>,
        request: &PageRequest,
    ) -> Result<Page<Product>> {
        let query = apply_sort(
            query,
            request,
            &[
                ("id", product::Column::Id),
                ("name", product::Column::Name),
                ("price", product::Column::Price),
            ],
            product::Column::Id,
        )?;

        let paginator = query.paginate(&self.db, request.size);
        let total = paginator.num_items().await.map_err(ShopError::Database)?;
        let models = paginator
            .fetch_page(request.page)
            .await
            .map_err(ShopError::Database)?;

        let categories = models
            .load_many_to_many(entities::Category, entities::ProductCategory, &self.db)
            .await
            .map_err(ShopError::Database)?;

        let products = models
            .iter()
            .zip(categories)
            .map(|(model, categories)| model.to_domain_product(categories))
            .collect();

        Ok(Page::new(products, request, total))
    }

    /// Page of distinct (id, name) pairs for products in any of `category_ids`
    /// (all categories when empty) whose lower-cased name contains `name`
    pub async fn search_product_keys(
        &self,
        category_ids: &[i64],
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<ProductKey>> {
        debug!(
            "Searching product keys, categories {:?} name {:?}",
            category_ids, name
        );

        let mut query = entities::Product::find()
            .select_only()
            .column(product::Column::Id)
            .column(product::Column::Name)
            .distinct()
            .join(JoinType::InnerJoin, product::Relation::ProductCategory.def())
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    product::Entity,
                    product::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            );

        if !category_ids.is_empty() {
            query = query.filter(product_category::Column::CategoryId.is_in(category_ids.to_vec()));
        }

        let query = apply_sort(
            query,
            request,
            &[("id", product::Column::Id), ("name", product::Column::Name)],
            product::Column::Id,
        )?;

        let paginator = query
            .into_model::<ProductKeyRow>()
            .paginate(&self.db, request.size);
        let total = paginator.num_items().await.map_err(ShopError::Database)?;
        let rows = paginator
            .fetch_page(request.page)
            .await
            .map_err(ShopError::Database)?;

        let keys = rows
            .into_iter()
            .map(|row| ProductKey {
                id: row.id,
                name: row.name,
            })
            .collect();

        Ok(Page::new(keys, request, total))
    }

    /// Products with their categories for exactly `ids`, in no particular order
    pub async fn find_products_with_categories(&self, ids: &[i64]) -> Result<Vec<Product>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = entities::Product::find()
            .filter(product::Column::Id.is_in(ids.to_vec()))
            .find_with_related(entities::Category)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(model, categories)| model.to_domain_product(categories))
            .collect())
    }

    /// Insert a product and its category links
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product> {
        debug!("Creating product: {}", draft.name);

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let categories = load_categories(&txn, &draft.category_ids).await?;

        let model = product::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            img_url: Set(draft.img_url),
        }
        .insert(&txn)
        .await
        .map_err(ShopError::Database)?;

        link_categories(&txn, model.id, &categories).await?;

        txn.commit().await.map_err(ShopError::Database)?;

        Ok(model.to_domain_product(categories))
    }

    /// Overwrite a product's fields and replace its category set
    pub async fn update_product(&self, product_id: i64, draft: ProductDraft) -> Result<Product> {
        debug!("Updating product: {}", product_id);

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let existing = entities::Product::find_by_id(product_id)
            .one(&txn)
            .await
            .map_err(ShopError::Database)?
            .ok_or_else(|| ShopError::resource_not_found(product_id))?;

        let categories = load_categories(&txn, &draft.category_ids).await?;

        let mut active: product::ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.description = Set(draft.description);
        active.price = Set(draft.price);
        active.img_url = Set(draft.img_url);
        let model = active.update(&txn).await.map_err(ShopError::Database)?;

        entities::ProductCategory::delete_many()
            .filter(product_category::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await
            .map_err(ShopError::Database)?;

        link_categories(&txn, product_id, &categories).await?;

        txn.commit().await.map_err(ShopError::Database)?;

        Ok(model.to_domain_product(categories))
    }

    /// Delete a product; blocked while order items reference it
    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        debug!("Deleting product: {}", product_id);

        let exists = entities::Product::find_by_id(product_id)
            .count(&self.db)
            .await
            .map_err(ShopError::Database)?
            > 0;
        if !exists {
            return Err(ShopError::resource_not_found(product_id));
        }

        entities::Product::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| ShopError::from_write(e, "Referential integrity failure"))?;

        Ok(())
    }
}

/// Resolve category ids, failing on the first one that does not exist
async fn load_categories<C: ConnectionTrait>(conn: &C, ids: &[i64]) -> Result<Vec<category::Model>> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let categories = entities::Category::find()
        .filter(category::Column::Id.is_in(ids.clone()))
        .all(conn)
        .await
        .map_err(ShopError::Database)?;

    match ids.iter().find(|id| !categories.iter().any(|c| c.id == **id)) {
        Some(missing) => Err(ShopError::resource_not_found(*missing)),
        None => Ok(categories),
    }
}

async fn link_categories<C: ConnectionTrait>(
    conn: &C,
    product_id: i64,
    categories: &[category::Model],
) -> Result<()> {
    if categories.is_empty() {
        return Ok(());
    }

    let links = categories.iter().map(|c| product_category::ActiveModel {
        product_id: Set(product_id),
        category_id: Set(c.id),
    });
    entities::ProductCategory::insert_many(links)
        .exec_without_returning(conn)
        .await
        .map_err(ShopError::Database)?;

    Ok(())
}
