//! Expiring Store Module
//!
//! A TTL cache of shared futures with single-flight lookups.
//!
//! The store keeps the *future* of a computation, not its output. Callers that
//! ask for a key while the first computation is still running attach to the
//! same future, and a failed computation stays cached until it expires or is
//! invalidated. Expiry is checked lazily when an entry is read; there is no
//! background sweeper.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::FutureExt;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheKey, CacheStats, Cached, Clock, Lookup, SystemClock};

struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

// == Expiring Store ==
/// Time-bounded cache mapping canonical keys to in-flight or resolved values.
pub struct ExpiringStore<V> {
    inner: Mutex<Inner<V>>,
    /// Time to live in milliseconds
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone + Send + Sync + 'static> ExpiringStore<V> {
    // == Constructor ==
    /// Creates a store whose entries live for `ttl_ms` milliseconds.
    pub fn new(ttl_ms: u64) -> Self {
        Self::with_clock(ttl_ms, Arc::new(SystemClock))
    }

    /// Creates a store that reads time from `clock`.
    pub fn with_clock(ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            ttl_ms,
            clock,
        }
    }

    // == Get ==
    /// Returns the cached future for `key`, or starts `compute` and caches it.
    ///
    /// `compute` runs at most once per miss, while the store is locked, so it
    /// must only build the future and never touch the store itself. Inside a
    /// tokio runtime the new future is also spawned, so it completes even if
    /// every caller stops waiting.
    pub fn get<K, F, Fut>(&self, key: K, compute: F) -> Cached<V>
    where
        K: Into<CacheKey>,
        F: FnOnce(&CacheKey) -> Fut,
        Fut: Future<Output = V> + Send + 'static,
    {
        let key = key.into();
        let canonical = key.canonical();
        let now = self.clock.now_ms();

        let mut inner = self.inner.lock();

        let lookup = match inner.entries.get(&canonical) {
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                inner.stats.record(Lookup::Hit);
                trace!(key = %canonical, "cache hit");
                return value;
            }
            Some(_) => Lookup::Expired,
            None => Lookup::Miss,
        };
        inner.stats.record(lookup);
        debug!(key = %canonical, ?lookup, "computing cache entry");

        let value: Cached<V> = compute(&key).boxed().shared();
        inner
            .entries
            .insert(canonical, CacheEntry::new(value.clone(), now, self.ttl_ms));
        drop(inner);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(value.clone().map(drop));
        }

        value
    }

    // == Set ==
    /// Stores an already-known value, replacing any existing entry.
    pub fn set<K: Into<CacheKey>>(&self, key: K, value: V) {
        let canonical = key.into().canonical();
        let now = self.clock.now_ms();

        self.inner
            .lock()
            .entries
            .insert(canonical.clone(), CacheEntry::ready(value, now, self.ttl_ms));
        trace!(key = %canonical, "cache primed");
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Does nothing if there is none.
    pub fn invalidate<K: Into<CacheKey>>(&self, key: K) {
        let canonical = key.into().canonical();

        let mut inner = self.inner.lock();
        if inner.entries.remove(&canonical).is_some() {
            inner.stats.record_removed(1);
            debug!(key = %canonical, "cache entry invalidated");
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.stats.record_removed(removed);
        debug!(removed, "cache cleared");
    }

    // == Purge Expired ==
    /// Drops entries whose TTL has lapsed and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();

        let mut inner = self.inner.lock();
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired(now));
        before - inner.entries.len()
    }

    /// Whether an unexpired entry exists for `key`.
    pub fn contains<K: Into<CacheKey>>(&self, key: K) -> bool {
        let canonical = key.into().canonical();
        let now = self.clock.now_ms();
        self.inner
            .lock()
            .entries
            .get(&canonical)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            total_entries: inner.entries.len(),
            ..inner.stats.clone()
        }
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Time to live in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }
}

impl<V> fmt::Debug for ExpiringStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringStore")
            .field("ttl_ms", &self.ttl_ms)
            .field("entries", &self.inner.lock().entries.len())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const TTL: u64 = 1_000;

    fn manual_store<V: Clone + Send + Sync + 'static>() -> (ExpiringStore<V>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        (ExpiringStore::with_clock(TTL, clock.clone()), clock)
    }

    /// Returns a compute function that counts its calls and yields `value`.
    fn counting(
        calls: &Arc<AtomicUsize>,
        value: &'static str,
    ) -> impl FnOnce(&CacheKey) -> futures::future::Ready<String> {
        let calls = calls.clone();
        move |_: &CacheKey| {
            calls.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(value.to_string())
        }
    }

    #[tokio::test]
    async fn test_get_computes_on_miss() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        let value = store.get("key1", counting(&calls, "value")).await;

        assert_eq!(value, "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_passes_key_to_compute() {
        let (store, _) = manual_store::<String>();
        let key = CacheKey::sequence([CacheKey::from(7), CacheKey::from("x")]);
        let expected = key.clone();

        let value = store
            .get(key, move |k| {
                assert_eq!(*k, expected);
                futures::future::ready("ok".to_string())
            })
            .await;

        assert_eq!(value, "ok");
    }

    #[tokio::test]
    async fn test_get_hits_before_ttl() {
        let (store, clock) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.get("key1", counting(&calls, "value")).await;
        clock.advance(TTL - 1);
        let second = store.get("key1", counting(&calls, "other")).await;

        assert_eq!(second, "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_get_recomputes_after_ttl() {
        let (store, clock) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.get("key1", counting(&calls, "value")).await;
        clock.advance(TTL + 1);
        let second = store.get("key1", counting(&calls, "fresh")).await;

        assert_eq!(second, "fresh");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.stats().expirations, 1);
    }

    #[tokio::test]
    async fn test_entry_expires_exactly_at_ttl() {
        let (store, clock) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.set("key1", "value".to_string());
        clock.advance(TTL);
        store.get("key1", counting(&calls, "fresh")).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_set_primes_cache() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.set(vec![1, 2], "value".to_string());
        let value = store.get(vec![1, 2], counting(&calls, "computed")).await;

        assert_eq!(value, "value");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_resets_ttl() {
        let (store, clock) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.set("key1", "value1".to_string());
        clock.advance(TTL - 10);
        store.set("key1", "value2".to_string());
        clock.advance(20);

        let value = store.get("key1", counting(&calls, "computed")).await;
        assert_eq!(value, "value2");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_forces_recompute() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.set("key1", "value".to_string());
        store.set("key2", "value".to_string());
        store.clear();

        assert!(store.is_empty());
        store.get("key1", counting(&calls, "value")).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.stats().invalidations, 2);
    }

    #[tokio::test]
    async fn test_invalidate_only_affects_one_key() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        store.set("key1", "value1".to_string());
        store.set("key2", "value2".to_string());
        store.invalidate("key1");

        let first = store.get("key1", counting(&calls, "recomputed")).await;
        let second = store.get("key2", counting(&calls, "recomputed")).await;

        assert_eq!(first, "recomputed");
        assert_eq!(second, "value2");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalidate_missing_key_is_noop() {
        let (store, _) = manual_store::<String>();
        store.invalidate("missing");
        assert_eq!(store.stats().invalidations, 0);
    }

    #[tokio::test]
    async fn test_invalidate_uses_canonical_key() {
        let (store, _) = manual_store::<String>();

        store.set(CacheKey::record([("a", 1), ("b", 2)]), "value".to_string());
        store.invalidate(CacheKey::record([("b", 2), ("a", 1)]));

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_cached() {
        let (store, _) = manual_store::<Result<String, String>>();
        let calls = Arc::new(AtomicUsize::new(0));

        let compute = |calls: Arc<AtomicUsize>| {
            move |_: &CacheKey| {
                calls.fetch_add(1, Ordering::SeqCst);
                futures::future::ready(Err::<String, _>("boom".to_string()))
            }
        };

        let first = store.get("key1", compute(calls.clone())).await;
        let second = store.get("key1", compute(calls.clone())).await;

        assert_eq!(first, Err("boom".to_string()));
        assert_eq!(second, Err("boom".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_gets_share_one_computation() {
        let store = Arc::new(ExpiringStore::<u64>::new(60_000));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                store
                    .get("shared", move |_| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        async {
                            tokio::time::sleep(Duration::from_millis(20)).await;
                            42u64
                        }
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_in_flight_entry_is_returned_while_pending() {
        let (store, _) = manual_store::<u32>();
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();

        let first = store.get("slow", move |_| async move { rx.await.unwrap_or(0) });
        let second = store.get("slow", |_| async { 99 });

        tx.send(7).unwrap();
        assert_eq!(first.await, 7);
        assert_eq!(second.await, 7);
    }

    #[tokio::test]
    async fn test_computation_completes_without_awaiting() {
        let (store, _) = manual_store::<u32>();
        let done = Arc::new(AtomicUsize::new(0));
        let flag = done.clone();

        drop(store.get("detached", move |_| async move {
            flag.fetch_add(1, Ordering::SeqCst);
            1
        }));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let (store, clock) = manual_store::<String>();

        store.set("old", "value".to_string());
        clock.advance(TTL / 2);
        store.set("new", "value".to_string());
        clock.advance(TTL / 2);

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains("new"));
        assert!(!store.contains("old"));
    }

    #[test]
    fn test_get_outside_runtime() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        let value = tokio_test::block_on(store.get("key1", counting(&calls, "value")));
        let again = tokio_test::block_on(store.get("key1", counting(&calls, "value")));

        assert_eq!(value, "value");
        assert_eq!(again, "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let (store, _) = manual_store::<String>();
        let calls = Arc::new(AtomicUsize::new(0));

        let _ = store.get("a", counting(&calls, "1"));
        let _ = store.get("a", counting(&calls, "1"));
        let _ = store.get("b", counting(&calls, "2"));

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 2);
    }

    #[test]
    fn test_ttl_accessor_and_debug() {
        let store = ExpiringStore::<String>::new(300_000);
        assert_eq!(store.ttl_ms(), 300_000);
        assert!(format!("{:?}", store).contains("ttl_ms: 300000"));
    }
}
