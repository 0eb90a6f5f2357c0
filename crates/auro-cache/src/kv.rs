//! Typed wrapper with automatic serialization over any [`KvStore`].

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::store::{KvStore, MemoryStore};
use crate::CacheError;

/// Type-safe cache over a shared key-value backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and every clone talks
/// to the same backend; an optional namespace prefixes every key so several
/// browsing contexts can share one backend.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Rc<dyn KvStore>,
    namespace: Option<String>,
}

impl Cache {
    /// Wrap a backend.
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
            namespace: None,
        }
    }

    /// Wrap an already shared backend.
    pub fn from_shared(store: Rc<dyn KvStore>) -> Self {
        Self {
            store,
            namespace: None,
        }
    }

    /// A throwaway in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Scope every key under `namespace`. An empty namespace means none.
    ///
    /// ```
    /// use auro_cache::Cache;
    /// let cache = Cache::in_memory().with_namespace("guest");
    /// assert_eq!(cache.key("auro-cart-v1"), "guest:auro-cart-v1");
    /// ```
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// The active namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Resolve a logical key to the backend key.
    pub fn key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => crate::cache_key!(ns, key),
            None => key.to_string(),
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and
    /// [`CacheError::SerializeError`] if the stored bytes don't parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("auro-cart-v1")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(&self.key(key))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("auro-cart-v1", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(&self.key(key), &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(&self.key(key))
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(&self.key(key))
    }

    /// Get all logical keys visible in this namespace.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let keys = self.store.keys()?;
        Ok(match &self.namespace {
            Some(ns) => {
                let prefix = format!("{}:", ns);
                keys.into_iter()
                    .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
                    .collect()
            }
            None => keys,
        })
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```
/// let key = auro_cache::cache_key!("admin", "orders", 1);
/// assert_eq!(key, "admin:orders:1");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        qty: u32,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let cache = Cache::in_memory();
        let entries = vec![Entry { id: "a".into(), qty: 2 }];
        cache.set("entries", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = cache.get("entries").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_missing() {
        let cache = Cache::in_memory();
        let loaded: Option<Vec<Entry>> = cache.get("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_wrong_shape_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.set("entries", &"not a list").unwrap();
        let result: Result<Option<Vec<Entry>>, _> = cache.get("entries");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let shared: Rc<dyn KvStore> = Rc::new(MemoryStore::new());
        let guest = Cache::from_shared(shared.clone()).with_namespace("guest");
        let other = Cache::from_shared(shared.clone()).with_namespace("other");

        guest.set("cart", &1).unwrap();
        assert!(guest.exists("cart").unwrap());
        assert!(!other.exists("cart").unwrap());
        assert_eq!(guest.keys().unwrap(), vec!["cart"]);
        assert!(other.keys().unwrap().is_empty());
        assert_eq!(shared.keys().unwrap(), vec!["guest:cart"]);
    }

    #[test]
    fn test_empty_namespace_is_none() {
        let cache = Cache::in_memory().with_namespace("");
        assert_eq!(cache.namespace(), None);
        assert_eq!(cache.key("k"), "k");
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let clone = cache.clone();
        cache.set("k", &true).unwrap();
        assert_eq!(clone.get::<bool>("k").unwrap(), Some(true));
        clone.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("session", "abc"), "session:abc");
        assert_eq!(cache_key!("a", "b", 3), "a:b:3");
    }
}
