//! "You may also like" suggestions for the bag page.

use std::collections::BTreeSet;

use crate::cart::LineItem;
use crate::catalog::{Catalog, Product};

/// Default number of suggestions shown.
pub const RECOMMENDATION_LIMIT: usize = 4;

/// Products to suggest alongside `items`.
///
/// Candidates come from the categories of products already in the bag, or
/// the whole catalog when no line matches a catalog product. Products in the
/// bag are excluded. Most popular first.
pub fn recommendations<'a>(catalog: &'a Catalog, items: &[LineItem], limit: usize) -> Vec<&'a Product> {
    let in_cart: BTreeSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let categories: BTreeSet<&str> = catalog
        .products()
        .iter()
        .filter(|p| in_cart.contains(p.id.as_str()))
        .map(|p| p.category.as_str())
        .collect();

    let mut list: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| categories.is_empty() || categories.contains(p.category.as_str()))
        .filter(|p| !in_cart.contains(p.id.as_str()))
        .collect();
    list.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    list.truncate(limit);
    list
}
