//! Line items and quantities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// The product fields captured when something goes in the bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: ProductId,
    /// Display name; may carry a selected size.
    pub name: String,
    pub price: Money,
    pub image: String,
}

/// A line quantity, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// `max(1, requested)`.
    pub fn clamped(requested: i64) -> Self {
        Quantity(requested.max(1).unsigned_abs())
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Quantity) -> Self {
        Quantity(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

impl TryFrom<u64> for Quantity {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Err("quantity must be at least 1".to_string()),
            v => Ok(Quantity(v)),
        }
    }
}

impl From<Quantity> for u64 {
    fn from(q: Quantity) -> u64 {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line in the bag.
///
/// Deserialization rejects negative prices, so a snapshot carrying one is
/// treated as malformed as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price captured at add time.
    pub price: Money,
    pub image: String,
    pub qty: Quantity,
}

impl LineItem {
    /// Create a line from a product entry.
    pub fn new(product: CartProduct, qty: Quantity) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            qty,
        }
    }

    /// `price * qty`.
    pub fn line_total(&self) -> Money {
        self.price.multiply(i64::try_from(self.qty.get()).unwrap_or(i64::MAX))
    }
}

#[derive(Deserialize)]
struct LineItemRecord {
    id: ProductId,
    name: String,
    price: Money,
    image: String,
    qty: Quantity,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = String;

    fn try_from(r: LineItemRecord) -> Result<Self, Self::Error> {
        if r.price.is_negative() {
            return Err(format!("negative price for {}", r.id));
        }
        Ok(LineItem {
            id: r.id,
            name: r.name,
            price: r.price,
            image: r.image,
            qty: r.qty,
        })
    }
}
