//! The read-only catalog of products and categories.

use std::collections::BTreeSet;

use crate::catalog::{sample, Category, Product};
use crate::error::CommerceError;

/// Products and categories, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit data.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The shop's built-in catalog.
    pub fn sample() -> Self {
        Self::new(sample::products(), sample::categories())
    }

    /// All products in catalog ("featured") order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product by id, failing with [`CommerceError::ProductNotFound`].
    pub fn require_product(&self, id: &str) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Display title of a category, falling back to the raw id.
    pub fn category_title<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map(|c| c.title.as_str()).unwrap_or(id)
    }

    /// Products in a category, in catalog order.
    pub fn products_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.category.as_str() == category)
    }

    /// Other products from the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Most popular products first.
    pub fn popular(&self, limit: usize) -> Vec<&Product> {
        let mut list: Vec<&Product> = self.products.iter().collect();
        list.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        list.truncate(limit);
        list
    }

    /// Most recently added products first.
    pub fn newest(&self, limit: usize) -> Vec<&Product> {
        let mut list: Vec<&Product> = self.products.iter().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list.truncate(limit);
        list
    }

    /// Number of distinct categories that have at least one product.
    pub fn stocked_category_count(&self) -> usize {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_size() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.products().len(), 12);
        assert_eq!(catalog.categories().len(), 9);
        assert_eq!(catalog.stocked_category_count(), 9);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::sample();
        let ring = catalog.product("ring-sol").unwrap();
        assert_eq!(ring.name, "Solitaire Diamond Ring");
        assert_eq!(ring.tag.as_deref(), Some("new"));
        assert!(catalog.product("nope").is_none());
        assert!(matches!(
            catalog.require_product("nope"),
            Err(CommerceError::ProductNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_category_title_fallback() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.category_title("mens"), "Men's");
        assert_eq!(catalog.category_title("watches"), "watches");
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::sample();
        let ring = catalog.product("ring-sol").unwrap();
        let related: Vec<&str> = catalog.related(ring, 4).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(related, vec!["ring-eternal"]);
    }

    #[test]
    fn test_products_in_category() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.products_in("earrings").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ear-etoile", "ear-drop-pearl"]);
    }

    #[test]
    fn test_popular_and_newest() {
        let catalog = Catalog::sample();
        let popular: Vec<&str> = catalog.popular(3).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(popular, vec!["ring-sol", "neck-aurora", "ear-etoile"]);

        let newest: Vec<&str> = catalog.newest(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(newest, vec!["ring-sol", "neck-aurora"]);
    }
}
