//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries once per cache interval

mod reaper;

pub use reaper::spawn_reaper_task;
