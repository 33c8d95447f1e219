//! Bounded TTL cache with lazy expiry.
//!
//! Expired entries are evicted when a `get` observes them; there is no
//! background sweeper. Callers that care about memory pressure between reads
//! can run [`TtlCache::cleanup`] on their own schedule. Capacity is bounded
//! with an LRU policy so a burst of distinct keys cannot grow the map without
//! limit.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Async-friendly TTL + LRU cache.
///
/// Expiry is tracked with `tokio::time::Instant`, so under
/// `#[tokio::test(start_paused = true)]` the clock can be driven
/// deterministically with `tokio::time::advance`.
pub struct TtlCache<K, V> {
    inner: Mutex<LruCache<K, Entry<V>>>,
    default_ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries with the given
    /// default TTL. A capacity of zero is bumped to one.
    #[must_use]
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
            default_ttl,
        }
    }

    /// Look up a key, evicting it if its TTL has elapsed.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.lock().await;
        if let Some(entry) = guard.get(key) {
            if Instant::now() < entry.expires_at {
                return Some(entry.value.clone());
            }
            guard.pop(key);
        }
        None
    }

    /// Insert a value under the default TTL. Overwrites any live entry for
    /// the same key (last writer wins).
    pub async fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl).await;
    }

    /// Insert a value with an explicit TTL.
    pub async fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        let mut guard = self.inner.lock().await;
        guard.put(key, Entry { value, expires_at });
    }

    /// Remove a key regardless of freshness. Returns whether an entry was
    /// present.
    pub async fn invalidate(&self, key: &K) -> bool {
        self.inner.lock().await.pop(key).is_some()
    }

    /// Sweep out every expired entry and return how many were removed.
    pub async fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut guard = self.inner.lock().await;
        let expired: Vec<K> = guard
            .iter()
            .filter(|(_, entry)| entry.expires_at <= now)
            .map(|(k, _)| k.clone())
            .collect();
        for key in &expired {
            guard.pop(key);
        }
        expired.len()
    }

    /// Number of entries currently stored, live or expired.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Whether the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
