use crate::core::models::{Client, Order, OrderItem, OrderLine, OrderStatus};
use crate::utils::error::{Result, ShopError};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, order, order_item};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find an order with its client, payment and items
    pub async fn find_order(&self, order_id: i64) -> Result<Option<Order>> {
        debug!("Finding order by ID: {}", order_id);

        let Some(header) = entities::Order::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(ShopError::Database)?
        else {
            return Ok(None);
        };

        let client = entities::User::find_by_id(header.client_id)
            .one(&self.db)
            .await
            .map_err(ShopError::Database)?
            .ok_or_else(|| ShopError::internal(format!("Order {} has no client", order_id)))?;

        let payment = entities::Payment::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(ShopError::Database)?;

        let rows = entities::OrderItem::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::ProductId)
            .find_also_related(entities::Product)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        let items = rows
            .into_iter()
            .map(|(item, product)| {
                let (name, img_url) = product
                    .map(|p| (p.name, p.img_url))
                    .unwrap_or_default();
                OrderItem {
                    product_id: item.product_id,
                    name,
                    img_url,
                    price: item.price,
                    quantity: item.quantity,
                }
            })
            .collect();

        let status = header
            .status
            .parse::<OrderStatus>()
            .map_err(ShopError::Internal)?;

        Ok(Some(Order {
            id: header.id,
            moment: header.moment,
            status,
            client: Client {
                id: client.id,
                name: client.name,
            },
            payment: payment.map(|p| p.to_domain_payment()),
            items,
        }))
    }

    /// Place an order for `client_id`, snapshotting each product's current price.
    /// Nothing is written when any product id is unknown.
    pub async fn place_order(&self, client_id: i64, lines: &[OrderLine]) -> Result<Order> {
        debug!("Placing order for client {} with {} lines", client_id, lines.len());

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let header = order::ActiveModel {
            id: NotSet,
            moment: Set(Utc::now()),
            status: Set(OrderStatus::WaitingPayment.as_str().to_string()),
            client_id: Set(client_id),
        }
        .insert(&txn)
        .await
        .map_err(ShopError::Database)?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = entities::Product::find_by_id(line.product_id)
                .one(&txn)
                .await
                .map_err(ShopError::Database)?
                .ok_or_else(|| ShopError::resource_not_found(line.product_id))?;

            items.push(order_item::ActiveModel {
                order_id: Set(header.id),
                product_id: Set(product.id),
                quantity: Set(line.quantity),
                price: Set(product.price),
            });
        }

        if !items.is_empty() {
            entities::OrderItem::insert_many(items)
                .exec_without_returning(&txn)
                .await
                .map_err(ShopError::Database)?;
        }

        txn.commit().await.map_err(ShopError::Database)?;

        self.find_order(header.id)
            .await?
            .ok_or_else(|| ShopError::resource_not_found(header.id))
    }
}
