//! Write-through persistent cart.

use auro_cache::{Cache, CacheError};
use tracing::{debug, warn};

use crate::cart::{Cart, CartProduct, LineItem};
use crate::money::Money;

/// Storage key for the cart snapshot, before namespacing.
pub const CART_STORAGE_KEY: &str = "auro-cart-v1";

/// A [`Cart`] that writes its full state to a [`Cache`] after every mutation.
///
/// In-memory state is authoritative. A failed write is logged and dropped,
/// and the next mutation writes the whole list again.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    cache: Cache,
}

impl CartStore {
    /// Restore the cart saved in `cache`, or start empty.
    ///
    /// A snapshot that can't be read or parsed is treated as absent.
    pub fn hydrate(cache: Cache) -> Self {
        let cart = match load(&cache) {
            Ok(Some(cart)) => {
                debug!(key = %cache.key(CART_STORAGE_KEY), items = cart.len(), "restored cart");
                cart
            }
            Ok(None) => {
                debug!(key = %cache.key(CART_STORAGE_KEY), "no saved cart");
                Cart::new()
            }
            Err(error) => {
                warn!(key = %cache.key(CART_STORAGE_KEY), %error, "discarding unreadable cart snapshot");
                Cart::new()
            }
        };
        Self { cart, cache }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// See [`Cart::add_item`].
    pub fn add_item(&mut self, product: CartProduct, qty: i64) {
        self.cart.add_item(product, qty);
        self.persist();
    }

    /// See [`Cart::remove_item`].
    pub fn remove_item(&mut self, id: &str) {
        self.cart.remove_item(id);
        self.persist();
    }

    /// See [`Cart::update_qty`].
    pub fn update_qty(&mut self, id: &str, qty: i64) {
        self.cart.update_qty(id, qty);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        match self.cache.set(CART_STORAGE_KEY, &self.cart) {
            Ok(()) => debug!(key = %self.cache.key(CART_STORAGE_KEY), items = self.cart.len(), "saved cart"),
            Err(error) => warn!(key = %self.cache.key(CART_STORAGE_KEY), %error, "failed to save cart"),
        }
    }
}

/// Read the saved cart snapshot without building a store.
pub fn load(cache: &Cache) -> Result<Option<Cart>, CacheError> {
    cache.get(CART_STORAGE_KEY)
}
