//! Session-scoped ownership of the cart store.
//!
//! One [`CartProvider`] owns the [`CartStore`] for an application session.
//! Everything else reaches the cart through [`CartContext`] handles handed
//! out by the provider. A handle can't be built any other way, and using one
//! after the provider is dropped panics.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use auro_cache::Cache;

use crate::cart::{Cart, CartProduct, CartStore, LineItem};
use crate::money::Money;

/// Owner of the session's cart.
#[derive(Debug)]
pub struct CartProvider {
    store: Rc<RefCell<CartStore>>,
}

impl CartProvider {
    /// Hydrate the cart from `cache` and take ownership of it.
    ///
    /// Hydration finishes before this returns, so no handle ever sees the
    /// cart before its snapshot is restored.
    pub fn mount(cache: Cache) -> Self {
        Self {
            store: Rc::new(RefCell::new(CartStore::hydrate(cache))),
        }
    }

    /// A handle for a consumer.
    pub fn context(&self) -> CartContext {
        CartContext {
            store: Rc::downgrade(&self.store),
        }
    }
}

/// A consumer's handle to the mounted cart.
///
/// # Panics
///
/// Every method panics if the [`CartProvider`] that issued the handle has
/// been dropped.
#[derive(Debug, Clone)]
pub struct CartContext {
    store: Weak<RefCell<CartStore>>,
}

impl CartContext {
    fn store(&self) -> Rc<RefCell<CartStore>> {
        match self.store.upgrade() {
            Some(store) => store,
            None => panic!("CartContext used after its CartProvider was dropped"),
        }
    }

    #[cfg(test)]
    fn is_mounted(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// A copy of the current cart.
    pub fn cart(&self) -> Cart {
        self.store().borrow().cart().clone()
    }

    /// A copy of the current lines.
    pub fn items(&self) -> Vec<LineItem> {
        self.store().borrow().items().to_vec()
    }

    pub fn get_item(&self, id: &str) -> Option<LineItem> {
        self.store().borrow().cart().get_item(id).cloned()
    }

    pub fn count(&self) -> u64 {
        self.store().borrow().count()
    }

    pub fn subtotal(&self) -> Money {
        self.store().borrow().subtotal()
    }

    pub fn add_item(&self, product: CartProduct, qty: i64) {
        self.store().borrow_mut().add_item(product, qty);
    }

    pub fn remove_item(&self, id: &str) {
        self.store().borrow_mut().remove_item(id);
    }

    pub fn update_qty(&self, id: &str, qty: i64) {
        self.store().borrow_mut().update_qty(id, qty);
    }

    pub fn clear(&self) {
        self.store().borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> CartProduct {
        CartProduct {
            id: "b".into(),
            name: "Chain".to_string(),
            price: Money::from_units(50),
            image: "y".to_string(),
        }
    }

    #[test]
    fn test_contexts_share_one_store() {
        let provider = CartProvider::mount(Cache::in_memory());
        let header = provider.context();
        let page = provider.context();
        page.add_item(chain(), 2);
        assert_eq!(header.count(), 2);
        assert_eq!(header.subtotal(), Money::from_units(100));
        header.clear();
        assert!(page.items().is_empty());
    }

    #[test]
    fn test_mount_hydrates_before_handing_out() {
        let cache = Cache::in_memory();
        {
            let provider = CartProvider::mount(cache.clone());
            provider.context().add_item(chain(), 1);
        }
        let provider = CartProvider::mount(cache);
        assert_eq!(provider.context().count(), 1);
    }

    #[test]
    #[should_panic(expected = "CartContext used after its CartProvider was dropped")]
    fn test_context_after_unmount_panics() {
        let provider = CartProvider::mount(Cache::in_memory());
        let ctx = provider.context();
        drop(provider);
        assert!(!ctx.is_mounted());
        ctx.count();
    }
}
