//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that reaps stale entries every `interval`.
///
/// The first sweep runs one full interval after the task starts. Each sweep
/// holds the store's write lock for the whole scan, so readers and writers
/// never observe a half-finished sweep. Entries older than `interval` are
/// removed, which bounds worst-case staleness at twice the interval.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `store` - Shared store to sweep
/// * `interval` - Sweep period and maximum entry age
/// * `cancel` - Token observed at every wait; cancelling ends the loop
///
/// # Returns
/// A JoinHandle that finishes once the token is cancelled.
pub fn spawn_reaper_task(
    runtime: &Handle,
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        run_reaper_loop(store, interval, cancel).await;
    })
}

/// Main reap loop.
async fn run_reaper_loop(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = interval_at(tokio::time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    debug!(interval_ms = interval.as_millis() as u64, "Cache reaper started");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Cache reaper shutting down");
                break;
            }
            _ = ticker.tick() => {
                sweep(&store, interval).await;
            }
        }
    }
}

/// Runs a single sweep under one write lock.
async fn sweep(store: &RwLock<CacheStore>, max_age: Duration) -> usize {
    let (removed, remaining) = {
        let mut guard = store.write().await;
        let removed = guard.reap(max_age, Instant::now());
        (removed, guard.len())
    };

    if removed > 0 {
        info!(removed, remaining, "Cache reaper evicted stale entries");
    } else {
        debug!(remaining, "Cache reaper: no stale entries");
    }
    removed
}
