//! Shop listing search module.
//!
//! Contains the filters and sort options behind the shop page.

mod filter;
mod query;

pub use filter::Filter;
pub use query::{ShopQuery, SortOption, ALL_CATEGORIES};
