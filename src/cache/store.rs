//! Cache Store Module
//!
//! Plain map storage for cached response bodies. Synchronization lives in
//! [`Cache`](crate::cache::Cache); this type assumes exclusive access for writes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to payload storage with age-based reaping.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The entry is stamped with the current time.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.insert_at(key, value, Instant::now());
    }

    /// Stores `value` under `key` with an explicit creation time.
    pub fn insert_at(&mut self, key: String, value: Bytes, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::created_at(value, created_at));
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Reads never touch the entry's age.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(CacheEntry::value)
    }

    // == Reap ==
    /// Removes every entry older than `max_age` at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(max_age, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
