//! Shopping cart module.
//!
//! [`Cart`] is the plain line-item state. [`CartStore`] adds write-through
//! persistence, and [`CartProvider`] / [`CartContext`] scope one store to an
//! application session.

mod cart;
mod item;
mod provider;
mod recommend;
mod store;

pub use cart::Cart;
pub use item::{CartProduct, LineItem, Quantity};
pub use provider::{CartContext, CartProvider};
pub use recommend::{recommendations, RECOMMENDATION_LIMIT};
pub use store::{load, CartStore, CART_STORAGE_KEY};
