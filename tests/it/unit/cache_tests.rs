//! Unit tests for the dataset cache.

use crate::helpers::{COUNTRY_CSV, scenario_dataset};
use statboard::data::{DataError, DatasetCache, ParseError, parse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn test_loader_runs_once_per_source() {
    let cache = DatasetCache::new();
    let calls = AtomicUsize::new(0);
    let loader = || -> Result<_, ParseError> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(scenario_dataset())
    };

    let first = cache.get_or_load("data/latest.csv", loader).unwrap();
    let second = cache.get_or_load("data/latest.csv", loader).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_sources_are_cached_separately() {
    let cache = DatasetCache::new();
    let a = cache.get_or_load("a.csv", || parse(COUNTRY_CSV)).unwrap();
    let b = cache.get_or_load("b.csv", || Ok::<_, ParseError>(scenario_dataset())).unwrap();

    assert_ne!(a.row_count(), b.row_count());
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_failure_is_retried() {
    let cache = DatasetCache::new();
    let calls = AtomicUsize::new(0);

    let failed = cache.get_or_load("https://example.org/latest.csv", || {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(DataError::Transport("connection reset".to_string()))
    });
    assert!(matches!(failed, Err(DataError::Transport(_))));
    assert!(!cache.contains("https://example.org/latest.csv"));

    let loaded = cache.get_or_load("https://example.org/latest.csv", || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, DataError>(scenario_dataset())
    });
    assert!(loaded.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_concurrent_requests_load_once() {
    let cache = Arc::new(DatasetCache::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache
                    .get_or_load("shared.csv", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(20));
                        Ok::<_, ParseError>(scenario_dataset())
                    })
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|ds| Arc::ptr_eq(ds, &results[0])));
}

#[test]
fn test_global_cache_is_shared() {
    let a = DatasetCache::global() as *const DatasetCache;
    let b = DatasetCache::global() as *const DatasetCache;
    assert_eq!(a, b);
}
