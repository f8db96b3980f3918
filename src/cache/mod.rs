//! Cache Module
//!
//! Provides an in-memory response cache with interval-based expiry.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default reap interval and maximum entry age (5 minutes)
pub const DEFAULT_INTERVAL_SECS: u64 = 300;
