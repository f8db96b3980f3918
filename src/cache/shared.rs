//! Shared Cache Handle
//!
//! Thread-safe, time-bounded response cache. Wraps a [`CacheStore`] in an
//! `Arc<RwLock<>>` and owns the background reaper that evicts stale entries.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::CacheError;
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Cloneable handle to a response cache.
///
/// All clones share the same entries and the same reaper. The `interval` is
/// used both as the sweep period and as the maximum entry age, so an entry
/// can stay visible for up to twice the interval before a sweep removes it.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
    reaper: Arc<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current runtime.
    ///
    /// # Arguments
    /// * `interval` - Sweep period and maximum entry age
    ///
    /// # Errors
    /// * `CacheError::InvalidInterval` if `interval` is zero
    /// * `CacheError::NoRuntime` if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(RwLock::new(CacheStore::new()));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reaper_task(&runtime, store.clone(), interval, shutdown.clone());

        debug!(interval_ms = interval.as_millis() as u64, "Response cache created");

        Ok(Self {
            store,
            interval,
            shutdown,
            reaper: Arc::new(reaper),
        })
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        self.store.write().await.insert(key, value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if present.
    ///
    /// Concurrent readers share the lock. Reading never extends an entry's life.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.read().await.get(key)
    }

    // == Shutdown ==
    /// Stops the reaper at its next wait point. Idempotent.
    ///
    /// Entries are kept and remain readable; they simply stop expiring.
    pub fn shutdown(&self) {
        if !self.shutdown.is_cancelled() {
            debug!("Stopping response cache reaper");
            self.shutdown.cancel();
        }
    }

    /// Returns true while the reaper task is alive.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
