//! Shop filter types.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by single category.
    Category(CategoryId),
    /// Filter by price range (inclusive on both ends).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Case-insensitive substring of the product name. Stored lowercased.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().trim().to_lowercase())
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(id) => &product.category == id,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
            Filter::Text(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_price_range_inclusive() {
        let catalog = Catalog::sample();
        let chain = catalog.product("neck-chain").unwrap();
        let filter = Filter::price_range(Some(Money::from_units(310)), Some(Money::from_units(310)));
        assert!(filter.matches(chain));
        let filter = Filter::price_range(Some(Money::from_units(311)), None);
        assert!(!filter.matches(chain));
    }

    #[test]
    fn test_text_filter_ignores_case() {
        let catalog = Catalog::sample();
        let pearl = catalog.product("ear-drop-pearl").unwrap();
        assert!(Filter::text("  PEARL ").matches(pearl));
        assert!(!Filter::text("gold").matches(pearl));
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::sample();
        let pearl = catalog.product("ear-drop-pearl").unwrap();
        assert!(Filter::category("earrings").matches(pearl));
        assert!(!Filter::category("rings").matches(pearl));
    }
}
