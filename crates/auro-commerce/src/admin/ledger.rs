//! Persisted record lists for the admin console.

use auro_cache::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// A record with a string id.
pub trait Record {
    fn record_id(&self) -> &str;
}

/// An ordered list of records written through to one cache key.
///
/// Opening reads the key; when it is absent or unreadable the list starts
/// from a seed instead and the seed is written back. Write failures are
/// logged and dropped.
#[derive(Debug)]
pub struct Ledger<T> {
    key: &'static str,
    records: Vec<T>,
    cache: Cache,
}

impl<T> Ledger<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Open the ledger stored under `key`, seeding it when nothing usable is there.
    pub fn open(cache: Cache, key: &'static str, seed: impl FnOnce() -> Vec<T>) -> Self {
        match cache.get::<Vec<T>>(key) {
            Ok(Some(records)) => {
                debug!(key = %cache.key(key), records = records.len(), "restored ledger");
                Self { key, records, cache }
            }
            other => {
                if let Err(error) = other {
                    warn!(key = %cache.key(key), %error, "discarding unreadable ledger");
                }
                let ledger = Self {
                    key,
                    records: seed(),
                    cache,
                };
                ledger.persist();
                ledger
            }
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Put a record at the front.
    pub fn prepend(&mut self, record: T) {
        self.records.insert(0, record);
        self.persist();
    }

    /// Put a record at the end.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
        self.persist();
    }

    /// Apply `f` to the record with `id`. Returns `None` when there is none.
    pub fn modify<R>(&mut self, id: &str, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let record = self.records.iter_mut().find(|r| r.record_id() == id)?;
        let out = f(record);
        self.persist();
        Some(out)
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        match self.cache.set(self.key, &self.records) {
            Ok(()) => debug!(key = %self.cache.key(self.key), records = self.records.len(), "saved ledger"),
            Err(error) => warn!(key = %self.cache.key(self.key), %error, "failed to save ledger"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_seed_is_used_and_saved() {
        let cache = Cache::in_memory();
        let ledger = Ledger::open(cache.clone(), "notes", || vec![note("n1", "hello")]);
        assert_eq!(ledger.len(), 1);
        let saved: Vec<Note> = cache.get("notes").unwrap().unwrap();
        assert_eq!(saved, vec![note("n1", "hello")]);
    }

    #[test]
    fn test_saved_records_win_over_seed() {
        let cache = Cache::in_memory();
        cache.set("notes", &Vec::<Note>::new()).unwrap();
        let ledger: Ledger<Note> = Ledger::open(cache, "notes", || vec![note("n1", "seed")]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unreadable_records_fall_back_to_seed() {
        let cache = Cache::in_memory();
        cache.set("notes", &"not a list").unwrap();
        let ledger: Ledger<Note> = Ledger::open(cache, "notes", || vec![note("n1", "seed")]);
        assert_eq!(ledger.records()[0].text, "seed");
    }

    #[test]
    fn test_mutations_write_through() {
        let cache = Cache::in_memory();
        let mut ledger = Ledger::open(cache.clone(), "notes", Vec::new);
        ledger.prepend(note("n1", "first"));
        ledger.prepend(note("n2", "second"));
        ledger.push(note("n3", "last"));
        assert_eq!(ledger.records().last(), Some(&note("n3", "last")));
        assert!(ledger.remove("n3"));
        assert_eq!(ledger.modify("n1", |n| n.text = "edited".to_string()), Some(()));
        assert_eq!(ledger.modify("zzz", |_| ()), None);
        assert!(ledger.remove("n2"));
        assert!(!ledger.remove("n2"));

        let reopened: Ledger<Note> = Ledger::open(cache, "notes", Vec::new);
        assert_eq!(reopened.records(), &[note("n1", "edited")]);
        assert_eq!(reopened.get("n1").map(|n| n.text.as_str()), Some("edited"));
    }
}
