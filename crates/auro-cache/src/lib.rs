//! Key-Value persistence layer for the Auro storefront.
//!
//! Provides a small, ergonomic API for persisting state snapshots with
//! automatic JSON serialization. Backends:
//!
//! - [`MemoryStore`]: in-process, for tests and ephemeral sessions
//! - [`FileStore`]: one file per key, survives restarts
//! - `SpinStore`: Spin's Key-Value Store (wasm32 only)
//!
//! # Example
//!
//! ```
//! use auro_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new()).with_namespace("guest");
//!
//! // Store a value
//! cache.set("auro-cart-v1", &vec![1, 2, 3]).unwrap();
//!
//! // Retrieve a value
//! let items: Option<Vec<u32>> = cache.get("auro-cart-v1").unwrap();
//! assert_eq!(items, Some(vec![1, 2, 3]));
//!
//! // Delete a value
//! cache.delete("auro-cart-v1").unwrap();
//! ```

mod error;
mod file;
mod kv;
#[cfg(target_arch = "wasm32")]
mod spin;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;
pub use store::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
