//! Raw key-value backends.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::CacheError;

/// A raw key-value backend.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single backend can be shared by every store in a session. Sessions are
/// single-threaded, so backends need not be `Send` or `Sync`.
pub trait KvStore: Debug {
    /// Retrieve the bytes stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Insert or overwrite the bytes stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Succeeds when the key is already absent.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List every key in the backend.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-process backend that lives as long as the session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.borrow();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.borrow_mut();
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.borrow_mut();
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let entries = self.entries.borrow();
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.borrow();
        Ok(entries.keys().cloned().collect())
    }
}
