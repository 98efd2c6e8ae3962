//! Order payloads

use crate::core::models::{Client, Order, OrderItem, OrderStatus, Payment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Requested line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// `POST /orders` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Order must have at least one item"))]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i64,
    pub name: String,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i64,
    pub moment: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            moment: payment.moment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub img_url: Option<String>,
    pub sub_total: f64,
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            sub_total: item.sub_total(),
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            img_url: item.img_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client: ClientDto,
    pub payment: Option<PaymentDto>,
    pub items: Vec<OrderItemDto>,
    pub total: f64,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        let total = order.total();
        Self {
            id: order.id,
            moment: order.moment,
            status: order.status,
            client: order.client.into(),
            payment: order.payment.map(PaymentDto::from),
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total,
        }
    }
}
