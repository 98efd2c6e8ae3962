//! Order service

use crate::auth::access::ensure_self_or_admin;
use crate::core::dto::{OrderDto, OrderItemRequest, OrderRequest};
use crate::core::models::{OrderLine, User};
use crate::storage::Database;
use crate::utils::error::{FieldMessage, Result, ShopError};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[derive(Debug, Clone)]
pub struct OrderService {
    db: Arc<Database>,
}

impl OrderService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Load an order visible to `me`: its client or an admin
    pub async fn find_by_id(&self, me: &User, order_id: i64) -> Result<OrderDto> {
        let order = self
            .db
            .find_order(order_id)
            .await?
            .ok_or_else(|| ShopError::resource_not_found(order_id))?;

        ensure_self_or_admin(me, order.client.id)?;
        Ok(order.into())
    }

    /// Place an order for `me` at current product prices
    pub async fn insert(&self, me: &User, request: OrderRequest) -> Result<OrderDto> {
        request.validate()?;
        let lines = order_lines(&request.items)?;

        let order = self.db.place_order(me.id, &lines).await?;
        info!("Order {} placed by user {}", order.id, me.id);
        Ok(order.into())
    }
}

/// Check quantities and fold repeated products into one line
fn order_lines(items: &[OrderItemRequest]) -> Result<Vec<OrderLine>> {
    let errors: Vec<FieldMessage> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.quantity < 1)
        .map(|(i, _)| FieldMessage::new(format!("items[{}].quantity", i), "Quantity must be positive"))
        .collect();
    if !errors.is_empty() {
        return Err(ShopError::Validation(errors));
    }

    let mut lines: Vec<OrderLine> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match lines.iter_mut().find(|l| l.product_id == item.product_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(item.quantity).ok_or_else(|| {
                    ShopError::field(format!("items[{}].quantity", i), "Quantity is too large")
                })?;
            }
            None => lines.push(OrderLine {
                product_id: item.product_id,
                quantity: item.quantity,
            }),
        }
    }
    Ok(lines)
}
