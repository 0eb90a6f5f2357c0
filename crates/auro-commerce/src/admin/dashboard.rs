//! Admin dashboard summary.

use serde::Serialize;

use crate::admin::{OrderBook, OrderTotals};
use crate::catalog::Catalog;

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub products: usize,
    /// Categories with at least one product.
    pub categories: usize,
    /// First product in catalog order.
    pub top_product: Option<String>,
    pub orders: OrderTotals,
}

impl DashboardSummary {
    pub fn collect(catalog: &Catalog, orders: &OrderBook) -> Self {
        Self {
            products: catalog.products().len(),
            categories: catalog.stocked_category_count(),
            top_product: catalog.products().first().map(|p| p.name.clone()),
            orders: orders.totals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auro_cache::Cache;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_dashboard_summary() {
        let catalog = Catalog::sample();
        let now = Utc.timestamp_millis_opt(1_735_000_000_000).unwrap();
        let orders = OrderBook::open(Cache::in_memory(), &catalog, now);
        let summary = DashboardSummary::collect(&catalog, &orders);
        assert_eq!(summary.products, 12);
        assert_eq!(summary.categories, 9);
        assert_eq!(summary.top_product.as_deref(), Some("Solitaire Diamond Ring"));
        assert_eq!(summary.orders.count, 2);
    }

    #[test]
    fn test_empty_catalog_dashboard() {
        let catalog = Catalog::default();
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let orders = OrderBook::open(Cache::in_memory(), &catalog, now);
        let summary = DashboardSummary::collect(&catalog, &orders);
        assert_eq!(summary.products, 0);
        assert_eq!(summary.top_product, None);
        assert_eq!(summary.orders, OrderTotals::default());
    }
}
