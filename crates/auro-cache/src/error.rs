//! Errors from the storage backends and the typed [`Cache`](crate::Cache).

use thiserror::Error;

/// Why a storage call failed.
///
/// Backends report their own failures as [`OpenError`](Self::OpenError),
/// [`StoreError`](Self::StoreError) or [`Io`](Self::Io). `Cache` adds
/// [`SerializeError`](Self::SerializeError) when a value isn't valid JSON
/// for the requested type.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A [`FileStore`](crate::FileStore) directory couldn't be created, or a
    /// Spin store couldn't be opened.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// A stored value didn't parse as the requested type, or a value
    /// couldn't be encoded.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The backend refused a read or write. [`MemoryStore`](crate::MemoryStore)
    /// never returns this; Spin and custom stores do.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Reading, writing or renaming a [`FileStore`](crate::FileStore) file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cache, FileStore};

    #[test]
    fn test_corrupt_value_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.set("cart", &"not a list").unwrap();
        let err = cache.get::<Vec<u32>>("cart").unwrap_err();
        assert!(matches!(err, CacheError::SerializeError(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_file_store_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"file, not a directory").unwrap();

        let err = FileStore::open(blocker.join("state")).unwrap_err();
        assert!(matches!(err, CacheError::OpenError(_)));
    }
}
