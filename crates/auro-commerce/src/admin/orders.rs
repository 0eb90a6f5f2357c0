//! Admin order book.

use std::fmt;
use std::str::FromStr;

use auro_cache::Cache;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::{Ledger, Record};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;

/// Storage key for the order book.
pub const ORDERS_STORAGE_KEY: &str = "admin-orders-v1";

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::InvalidStatus(s.to_string()))
    }
}

/// A purchased line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OrderItem {
    /// One unit of `product` per `qty`.
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty,
            image: Some(product.image.clone()),
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.multiply(i64::from(self.qty))
    }
}

/// Who placed an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub customer: OrderCustomer,
}

impl Order {
    /// Sum of `price * qty` over the items.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Case-insensitive match on id, customer name or email, or any item name.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.id.as_str().to_lowercase().contains(&q)
            || self.customer.name.to_lowercase().contains(&q)
            || self.customer.email.to_lowercase().contains(&q)
            || self.items.iter().any(|i| i.name.to_lowercase().contains(&q))
    }
}

impl Record for Order {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Headline counts for the order list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub count: usize,
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
}

/// The persisted order list.
#[derive(Debug)]
pub struct OrderBook {
    ledger: Ledger<Order>,
}

impl OrderBook {
    /// Open the order book, seeding two sample orders on first use.
    pub fn open(cache: Cache, catalog: &Catalog, now: DateTime<Utc>) -> Self {
        Self {
            ledger: Ledger::open(cache, ORDERS_STORAGE_KEY, || sample_orders(catalog, now)),
        }
    }

    pub fn orders(&self) -> &[Order] {
        self.ledger.records()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.ledger.get(id)
    }

    /// Orders with `status` (all when `None`) that match `search`.
    pub fn filtered(&self, status: Option<OrderStatus>, search: &str) -> Vec<&Order> {
        self.orders()
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .filter(|o| o.matches(search))
            .collect()
    }

    pub fn totals(&self) -> OrderTotals {
        let orders = self.orders();
        let with = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
        OrderTotals {
            count: orders.len(),
            pending: with(OrderStatus::Pending),
            processing: with(OrderStatus::Processing),
            shipped: with(OrderStatus::Shipped),
        }
    }

    pub fn change_status(&mut self, id: &str, status: OrderStatus) -> Result<(), CommerceError> {
        self.ledger
            .modify(id, |o| o.status = status)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<(), CommerceError> {
        if self.ledger.remove(id) {
            Ok(())
        } else {
            Err(CommerceError::OrderNotFound(id.to_string()))
        }
    }

    /// Add a pending single-item order for `product` at the front.
    pub fn create_sample(&mut self, product: &Product, now: DateTime<Utc>) -> OrderId {
        let id = OrderId::timestamped(now);
        self.ledger.prepend(Order {
            id: id.clone(),
            created_at: now,
            status: OrderStatus::Pending,
            items: vec![OrderItem::from_product(product, 1)],
            customer: OrderCustomer {
                name: "New Customer".to_string(),
                email: "new@example.com".to_string(),
                address: Some(String::new()),
            },
        });
        id
    }
}

/// The orders a fresh console starts with.
pub fn sample_orders(catalog: &Catalog, now: DateTime<Utc>) -> Vec<Order> {
    let products = catalog.products();
    let Some(first) = products.first() else {
        return Vec::new();
    };
    let second = products.get(1).unwrap_or(first);
    let earlier = now - Duration::milliseconds(1_000_000);
    vec![
        Order {
            id: OrderId::timestamped(now),
            created_at: now,
            status: OrderStatus::Pending,
            items: vec![
                OrderItem::from_product(first, 1),
                OrderItem::from_product(second, 2),
            ],
            customer: OrderCustomer {
                name: "Ava Smith".to_string(),
                email: "ava@example.com".to_string(),
                address: Some("123 Rue de Paris".to_string()),
            },
        },
        Order {
            id: OrderId::timestamped(earlier),
            created_at: earlier,
            status: OrderStatus::Shipped,
            items: vec![OrderItem::from_product(second, 1)],
            customer: OrderCustomer {
                name: "Liam Johnson".to_string(),
                email: "liam@example.com".to_string(),
                address: Some("45 Avenue".to_string()),
            },
        },
    ]
}
