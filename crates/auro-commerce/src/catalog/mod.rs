//! Product catalog module.
//!
//! The catalog is read-only reference data: products, categories, size
//! options and the daily deal. The cart never reads it directly; call sites
//! turn a [`Product`] into a cart entry before adding it.

mod catalog;
mod category;
mod deal;
mod product;
mod sample;
mod size;

pub use catalog::Catalog;
pub use category::Category;
pub use deal::{deal_of_the_day, Deal, DEAL_MARKUP};
pub use product::Product;
pub use size::{size_options, SizeSelection, ONE_SIZE};
