//! Admin customer directory.

use std::collections::BTreeMap;

use auro_cache::Cache;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::{Ledger, Order, Record};
use crate::error::CommerceError;
use crate::ids::CustomerId;
use crate::money::Money;

/// Storage key for the customer directory.
pub const CUSTOMERS_STORAGE_KEY: &str = "admin-customers-v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Record for Customer {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Fields to change on a customer. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Order history for one email address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CustomerStats {
    pub orders: usize,
    pub total: Money,
}

/// One customer per distinct order email, in order of first appearance.
///
/// An order without an email gets a placeholder `unknown-<order id>`.
pub fn customers_from_orders(orders: &[Order]) -> Vec<Customer> {
    let mut customers: Vec<Customer> = Vec::new();
    for order in orders {
        let email = if order.customer.email.is_empty() {
            format!("unknown-{}", order.id)
        } else {
            order.customer.email.clone()
        };
        if customers.iter().any(|c| c.email == email) {
            continue;
        }
        let name = if order.customer.name.is_empty() {
            email.clone()
        } else {
            order.customer.name.clone()
        };
        customers.push(Customer {
            id: CustomerId::new(format!("{}-{}", CustomerId::PREFIX, customers.len() + 1)),
            name,
            email,
            address: Some(order.customer.address.clone().unwrap_or_default()),
            phone: None,
        });
    }
    customers
}

/// Order count and spend per email.
pub fn stats_by_email(orders: &[Order]) -> BTreeMap<String, CustomerStats> {
    let mut stats: BTreeMap<String, CustomerStats> = BTreeMap::new();
    for order in orders {
        let entry = stats.entry(order.customer.email.clone()).or_default();
        entry.orders += 1;
        entry.total = entry.total + order.total();
    }
    stats
}

/// The persisted customer directory.
#[derive(Debug)]
pub struct CustomerBook {
    ledger: Ledger<Customer>,
}

impl CustomerBook {
    /// Open the directory, deriving it from `orders` on first use.
    pub fn open(cache: Cache, orders: &[Order]) -> Self {
        Self {
            ledger: Ledger::open(cache, CUSTOMERS_STORAGE_KEY, || customers_from_orders(orders)),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        self.ledger.records()
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.ledger.get(id)
    }

    /// Customers whose name, email or total spend contains `query`.
    pub fn search(&self, query: &str, stats: &BTreeMap<String, CustomerStats>) -> Vec<&Customer> {
        let q = query.trim().to_lowercase();
        self.customers()
            .iter()
            .filter(|c| {
                q.is_empty()
                    || c.name.to_lowercase().contains(&q)
                    || c.email.to_lowercase().contains(&q)
                    || stats
                        .get(&c.email)
                        .is_some_and(|s| s.total.display_amount().contains(&q))
            })
            .collect()
    }

    /// Add a placeholder customer at the front.
    pub fn create(&mut self, now: DateTime<Utc>) -> CustomerId {
        let id = CustomerId::timestamped(now);
        self.ledger.prepend(Customer {
            id: id.clone(),
            name: "New customer".to_string(),
            email: format!("new+{}@example.com", now.timestamp_millis()),
            address: None,
            phone: None,
        });
        id
    }

    pub fn update(&mut self, id: &str, patch: CustomerPatch) -> Result<(), CommerceError> {
        self.ledger
            .modify(id, |c| {
                if let Some(name) = patch.name {
                    c.name = name;
                }
                if let Some(email) = patch.email {
                    c.email = email;
                }
                if patch.address.is_some() {
                    c.address = patch.address;
                }
                if patch.phone.is_some() {
                    c.phone = patch.phone;
                }
            })
            .ok_or_else(|| CommerceError::CustomerNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<(), CommerceError> {
        if self.ledger.remove(id) {
            Ok(())
        } else {
            Err(CommerceError::CustomerNotFound(id.to_string()))
        }
    }
}
