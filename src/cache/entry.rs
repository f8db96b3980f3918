//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A single cached payload with its creation time.
///
/// Both fields are fixed at insertion. Replacing a key creates a new entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    value: Bytes,
    /// Monotonic creation timestamp
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Accessors ==
    /// Returns an immutable, reference-counted view of the payload.
    pub fn value(&self) -> Bytes {
        self.value.clone()
    }

    // == Age ==
    /// Elapsed time between creation and `now`.
    ///
    /// Saturates to zero if `now` precedes the creation time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `max_age` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `max_age` exactly is
    /// still fresh. Only a strictly greater age makes it eligible for reaping.
    pub fn is_stale(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }
}
