//! Storefront domain types and logic for the Auro jewelry shop.
//!
//! - **Catalog**: products, categories, sizes, deal of the day
//! - **Search**: shop listing filters and sort options
//! - **Cart**: line items, the write-through cart store, session provider
//! - **Admin**: order, payment and customer ledgers
//!
//! # Example
//!
//! ```
//! use auro_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let provider = CartProvider::mount(Cache::in_memory());
//! let cart = provider.context();
//!
//! let ring = catalog.product("ring-eternal").unwrap();
//! cart.add_item(ring.cart_entry(), 2);
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.subtotal().display(), "$1360.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use auro_cache::Cache;

    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{deal_of_the_day, Catalog, Category, Deal, Product, SizeSelection};

    // Search
    pub use crate::search::{Filter, ShopQuery, SortOption};

    // Cart
    pub use crate::cart::{
        recommendations, Cart, CartContext, CartProduct, CartProvider, CartStore, LineItem,
        Quantity,
    };

    // Admin
    pub use crate::admin::{
        Customer, CustomerBook, DashboardSummary, Order, OrderBook, OrderStatus, Payment,
        PaymentBook, PaymentStatus, ProductBook,
    };
}
