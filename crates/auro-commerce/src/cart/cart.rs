//! In-memory cart state.

use serde::{Deserialize, Serialize};

use crate::cart::{CartProduct, LineItem, Quantity};
use crate::money::Money;

/// The line items in the bag, in order of first add.
///
/// Holds at most one line per product id, and every line has a quantity of
/// at least one. Serializes as a bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Find the line for a product.
    pub fn get_item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id.as_str() == id)
    }

    /// Add `qty` of a product.
    ///
    /// A quantity of zero or less counts as one. When the product already has
    /// a line its quantity grows and its name, price and image are kept.
    pub fn add_item(&mut self, product: CartProduct, qty: i64) {
        let qty = Quantity::clamped(qty);
        match self.items.iter_mut().find(|i| i.id == product.id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(qty),
            None => self.items.push(LineItem::new(product, qty)),
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id.as_str() != id);
        self.items.len() != before
    }

    /// Set the quantity for `id`, clamped to at least one.
    ///
    /// Returns whether a line was found.
    pub fn update_qty(&mut self, id: &str, qty: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id.as_str() == id) {
            Some(item) => {
                item.qty = Quantity::clamped(qty);
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| i.qty.get()).sum()
    }

    /// Sum of `price * qty` across all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = String;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|prev| prev.id == item.id) {
                return Err(format!("duplicate line for {}", item.id));
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: i64, image: &str) -> CartProduct {
        CartProduct {
            id: id.into(),
            name: name.to_string(),
            price: Money::from_units(price),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_add_item_creates_line() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.subtotal(), Money::from_units(100));
    }

    #[test]
    fn test_add_existing_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 1);
        cart.add_item(product("a", "Renamed", 999, "z"), 2);
        let item = cart.get_item("a").unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(item.name, "Ring");
        assert_eq!(item.price, Money::from_units(100));
        assert_eq!(item.image, "x");
        assert_eq!(item.qty.get(), 3);
    }

    #[test]
    fn test_add_non_positive_counts_as_one() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 0);
        cart.add_item(product("a", "Ring", 100, "x"), -4);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_update_qty_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 5);
        assert!(cart.update_qty("a", 0));
        assert_eq!(cart.get_item("a").unwrap().qty.get(), 1);
        assert!(cart.update_qty("a", -3));
        assert_eq!(cart.get_item("a").unwrap().qty.get(), 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_large_quantities_are_kept() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 1, "x"), 9999);
        cart.add_item(product("a", "Ring", 1, "x"), 1);
        assert_eq!(cart.count(), 10_000);

        assert!(cart.update_qty("a", 20_000));
        assert_eq!(cart.count(), 20_000);
        assert_eq!(cart.subtotal(), Money::from_units(20_000));
    }

    #[test]
    fn test_missing_ids_are_no_ops() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 1);
        let before = cart.clone();
        assert!(!cart.update_qty("zzz", 4));
        assert!(!cart.remove_item("zzz"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        cart.add_item(product("b", "Chain", 50, "y"), 1);
        cart.add_item(product("a", "Ring", 100, "x"), 1);
        cart.add_item(product("b", "Chain", 50, "y"), 1);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 3);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_scenario_totals() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 1);
        cart.add_item(product("b", "Chain", 50, "y"), 2);
        assert_eq!((cart.count(), cart.subtotal()), (3, Money::from_units(200)));

        cart.update_qty("a", 3);
        assert_eq!((cart.count(), cart.subtotal()), (5, Money::from_units(400)));

        cart.remove_item("b");
        assert_eq!((cart.count(), cart.subtotal()), (3, Money::from_units(300)));
    }

    #[test]
    fn test_cart_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "Ring", 100, "x"), 2);
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"a","name":"Ring","price":100,"image":"x","qty":2}]"#
        );
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_cart_rejects_duplicate_lines() {
        let raw = r#"[
            {"id":"a","name":"Ring","price":100,"image":"x","qty":1},
            {"id":"a","name":"Ring","price":100,"image":"x","qty":2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(raw).is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"items":[]}"#).is_err());
    }
}
