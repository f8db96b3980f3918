//! Integration tests for the response cache and its reaper
//!
//! These run against the real clock, so intervals are kept short and every
//! assertion leaves tens of milliseconds of slack around sweep boundaries.

use std::time::Duration;

use bytes::Bytes;
use pokedex::cache::Cache;
use pokedex::error::CacheError;
use tokio::time::{sleep, timeout};

#[tokio::test]
async fn test_entry_expires_after_sweep_boundary() {
    let cache = Cache::new(Duration::from_millis(100)).unwrap();

    cache.add("u1", "body1").await;

    sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.get("u1").await, Some(Bytes::from_static(b"body1")));

    sleep(Duration::from_millis(200)).await;
    assert_eq!(cache.get("u1").await, None);

    cache.shutdown();
}

#[tokio::test]
async fn test_stale_entry_visible_until_next_sweep() {
    let cache = Cache::new(Duration::from_millis(200)).unwrap();

    // Insert halfway between construction and the first sweep at 200ms
    sleep(Duration::from_millis(100)).await;
    cache.add("key", "value").await;

    // ~350ms: older than the interval, but the 400ms sweep hasn't run yet
    sleep(Duration::from_millis(250)).await;
    assert!(cache.get("key").await.is_some(), "stale entry persists until a sweep");

    // ~550ms: the 400ms sweep saw it at age ~300ms
    sleep(Duration::from_millis(200)).await;
    assert!(cache.get("key").await.is_none());

    cache.shutdown();
}

#[tokio::test]
async fn test_multiple_keys_and_miss() {
    let cache = Cache::new(Duration::from_secs(60)).unwrap();

    cache.add("u1", "a").await;
    cache.add("u2", "b").await;

    assert_eq!(cache.get("u1").await, Some(Bytes::from_static(b"a")));
    assert_eq!(cache.get("u2").await, Some(Bytes::from_static(b"b")));
    assert_eq!(cache.get("u3").await, None);

    cache.shutdown();
}

#[tokio::test]
async fn test_reused_key_after_expiry_is_fresh() {
    let cache = Cache::new(Duration::from_millis(50)).unwrap();

    cache.add("key", "old").await;
    sleep(Duration::from_millis(180)).await;
    assert!(cache.get("key").await.is_none());

    cache.add("key", "new").await;
    assert_eq!(cache.get("key").await, Some(Bytes::from_static(b"new")));

    cache.shutdown();
}

#[tokio::test]
async fn test_zero_interval_rejected() {
    assert_eq!(
        Cache::new(Duration::ZERO).unwrap_err(),
        CacheError::InvalidInterval
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_disjoint_writers_lose_nothing() {
    let cache = Cache::new(Duration::from_secs(30)).unwrap();
    let mut handles = Vec::new();

    for task in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..200 {
                let key = format!("https://pokeapi.co/api/v2/pokemon/{task}-{i}/");
                cache.add(key.clone(), format!("{task}:{i}")).await;
                let got = cache.get(&key).await;
                assert_eq!(got, Some(Bytes::from(format!("{task}:{i}"))));
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.len().await, 8 * 200);
    for task in 0..8 {
        for i in 0..200 {
            let key = format!("https://pokeapi.co/api/v2/pokemon/{task}-{i}/");
            assert!(cache.get(&key).await.is_some(), "lost update for {key}");
        }
    }

    cache.shutdown();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_access_with_busy_reaper() {
    let cache = Cache::new(Duration::from_millis(5)).unwrap();
    let mut handles = Vec::new();

    for task in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..500 {
                let key = format!("k{task}-{}", i % 25);
                let value = format!("{task}:{i}");
                cache.add(key.clone(), value).await;
                // The reaper may have removed it, but never corrupted it
                if let Some(got) = cache.get(&key).await {
                    assert!(got.starts_with(format!("{task}:").as_bytes()));
                }
                if i % 50 == 0 {
                    tokio::task::yield_now().await;
                }
            }
        }));
    }

    let all = async {
        for handle in handles {
            handle.await.unwrap();
        }
    };
    timeout(Duration::from_secs(10), all)
        .await
        .expect("cache operations deadlocked");

    assert!(cache.is_reaping());
    cache.shutdown();
}

#[tokio::test]
async fn test_shutdown_stops_expiry() {
    let cache = Cache::new(Duration::from_millis(30)).unwrap();
    cache.shutdown();
    sleep(Duration::from_millis(20)).await;
    assert!(!cache.is_reaping());

    cache.add("key", "value").await;
    sleep(Duration::from_millis(150)).await;

    assert!(cache.get("key").await.is_some());
}
