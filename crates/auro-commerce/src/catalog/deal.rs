//! Deal of the day.

use chrono::{Datelike, NaiveDate};

use crate::catalog::{Catalog, Product};
use crate::money::Money;

/// Markup applied to the deal price to show the struck-through "was" price.
pub const DEAL_MARKUP: f64 = 1.15;

/// Today's featured product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deal<'a> {
    /// The featured product.
    pub product: &'a Product,
    /// The "was" price shown next to the real price.
    pub compare_at: Money,
}

/// Pick the deal for `date`: the product at `day_of_year % len`.
///
/// Returns `None` for an empty catalog.
pub fn deal_of_the_day(catalog: &Catalog, date: NaiveDate) -> Option<Deal<'_>> {
    let products = catalog.products();
    if products.is_empty() {
        return None;
    }
    let index = date.ordinal() as usize % products.len();
    let product = &products[index];
    Some(Deal {
        product,
        compare_at: product.price.multiply_decimal(DEAL_MARKUP),
    })
}
