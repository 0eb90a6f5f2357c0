//! Shop query builder.

use crate::catalog::{Catalog, Product};
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Category parameter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by newest first.
    Newest,
    /// Sort by popularity, highest first.
    Popular,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
        SortOption::Popular,
    ];

    /// Parameter id (e.g. `price_asc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Popular => "Most Popular",
        }
    }

    /// Parse a parameter id. Unknown ids fall back to [`SortOption::Featured`].
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == id.trim())
            .unwrap_or_default()
    }

    /// Sort in place. The sort is stable, so ties keep catalog order.
    pub fn sort(&self, list: &mut [&Product]) {
        match self {
            SortOption::Featured => {}
            SortOption::PriceAsc => list.sort_by_key(|p| p.price),
            SortOption::PriceDesc => list.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOption::Newest => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOption::Popular => list.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        }
    }
}

/// A shop listing query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShopQuery {
    /// Category to restrict to; `None` means all.
    pub category: Option<CategoryId>,
    /// Minimum price; only applied when positive.
    pub min_price: Option<Money>,
    /// Maximum price; only applied when positive.
    pub max_price: Option<Money>,
    /// Name search text.
    pub text: Option<String>,
    /// Sort option.
    pub sort: SortOption,
}

impl ShopQuery {
    /// Create an empty query: every product, featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse shop parameters (`q`, `category`, `sort`, `min`, `max`).
    ///
    /// Unknown keys are ignored, as are prices that don't parse.
    pub fn from_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = Self::new();
        for (key, value) in params {
            match key {
                "q" => query = query.with_text(value),
                "category" => query = query.with_category(value),
                "sort" => query = query.with_sort(SortOption::from_id(value)),
                "min" => query.min_price = parse_price(value),
                "max" => query.max_price = parse_price(value),
                _ => {}
            }
        }
        query
    }

    /// Set the name search text. Blank text clears it.
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim();
        self.text = (!text.is_empty()).then(|| text.to_string());
        self
    }

    /// Restrict to a category. `"all"` or blank clears it.
    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        let category = category.as_ref().trim();
        self.category = (!category.is_empty() && category != ALL_CATEGORIES)
            .then(|| CategoryId::new(category));
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// The filters this query applies.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(category) = &self.category {
            filters.push(Filter::Category(category.clone()));
        }
        let min = self.min_price.filter(|m| m.amount_cents > 0);
        let max = self.max_price.filter(|m| m.amount_cents > 0);
        if min.is_some() || max.is_some() {
            filters.push(Filter::price_range(min, max));
        }
        if let Some(text) = &self.text {
            filters.push(Filter::text(text));
        }
        filters
    }

    /// Run the query against a catalog.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let filters = self.filters();
        let mut list: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect();
        self.sort.sort(&mut list);
        list
    }
}

fn parse_price(value: &str) -> Option<Money> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(Money::from_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(list: &[&'a Product]) -> Vec<&'a str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_catalog_order() {
        let catalog = Catalog::sample();
        let list = ShopQuery::new().apply(&catalog);
        assert_eq!(list.len(), 12);
        assert_eq!(list[0].id.as_str(), "ring-sol");
        assert_eq!(list[11].id.as_str(), "mens-steel");
    }

    #[test]
    fn test_category_all_is_no_filter() {
        let catalog = Catalog::sample();
        let query = ShopQuery::new().with_category("all");
        assert!(query.category.is_none());
        assert_eq!(query.apply(&catalog).len(), 12);
    }

    #[test]
    fn test_category_and_price_sort() {
        let catalog = Catalog::sample();
        let query = ShopQuery::new()
            .with_category("rings")
            .with_sort(SortOption::PriceAsc);
        assert_eq!(ids(&query.apply(&catalog)), vec!["ring-eternal", "ring-sol"]);
    }

    #[test]
    fn test_price_bounds() {
        let catalog = Catalog::sample();
        let query = ShopQuery::new()
            .with_price_range(Some(Money::from_units(400)), Some(Money::from_units(460)))
            .with_sort(SortOption::PriceDesc);
        assert_eq!(
            ids(&query.apply(&catalog)),
            vec!["brace-satin", "mens-steel", "ear-etoile"]
        );
    }

    #[test]
    fn test_zero_bounds_are_ignored() {
        let query = ShopQuery::new().with_price_range(Some(Money::zero()), Some(Money::zero()));
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_text_search() {
        let catalog = Catalog::sample();
        let query = ShopQuery::new().with_text("PEND");
        assert_eq!(ids(&query.apply(&catalog)), vec!["neck-aurora", "pend-rose"]);
        assert!(ShopQuery::new().with_text("   ").text.is_none());
    }

    #[test]
    fn test_newest_and_popular() {
        let catalog = Catalog::sample();
        let newest = ShopQuery::new().with_sort(SortOption::Newest).apply(&catalog);
        assert_eq!(newest[0].id.as_str(), "ring-sol");
        assert_eq!(newest[11].id.as_str(), "mens-steel");
        let popular = ShopQuery::new().with_sort(SortOption::Popular).apply(&catalog);
        assert_eq!(popular[0].id.as_str(), "ring-sol");
        assert_eq!(popular[11].id.as_str(), "mens-steel");
    }

    #[test]
    fn test_from_params() {
        let query = ShopQuery::from_params([
            ("q", "band"),
            ("category", "rings"),
            ("sort", "price_desc"),
            ("min", "abc"),
            ("max", "1000"),
            ("page", "2"),
        ]);
        assert_eq!(query.text.as_deref(), Some("band"));
        assert_eq!(query.category, Some(CategoryId::new("rings")));
        assert_eq!(query.sort, SortOption::PriceDesc);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, Some(Money::from_units(1000)));

        let catalog = Catalog::sample();
        assert_eq!(ids(&query.apply(&catalog)), vec!["ring-eternal"]);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        assert_eq!(SortOption::from_id("cheapest"), SortOption::Featured);
        assert_eq!(SortOption::from_id("popular"), SortOption::Popular);
    }
}
