//! Order models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    WaitingPayment,
    Paid,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// Value stored in the `orders.status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::WaitingPayment => "WAITING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING_PAYMENT" => Ok(OrderStatus::WaitingPayment),
            "PAID" => Ok(OrderStatus::Paid),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELED" => Ok(OrderStatus::Canceled),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// Purchaser summary carried by an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
}

/// Payment recorded against an order, keyed by the order id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub moment: DateTime<Utc>,
}

/// Line item with the unit price captured at purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub name: String,
    pub img_url: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl OrderItem {
    pub fn sub_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client: Client,
    pub payment: Option<Payment>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::sub_total).sum()
    }
}

/// Requested product and quantity for a new order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i32,
}
