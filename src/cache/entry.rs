//! Cache Entry Module
//!
//! A shared future together with the moment it stops being served.

use std::fmt;

use futures::future::{BoxFuture, FutureExt, Shared};

/// A cloneable handle to a cached computation. Every clone resolves to the
/// same output.
pub type Cached<V> = Shared<BoxFuture<'static, V>>;

// == Cache Entry ==
/// Represents a single cache entry.
pub struct CacheEntry<V> {
    /// The in-flight or resolved computation
    pub value: Cached<V>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V: Clone + Send + Sync + 'static> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` after `now`.
    pub fn new(value: Cached<V>, now: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    /// Creates an entry holding an already-resolved value.
    pub fn ready(value: V, now: u64, ttl_ms: u64) -> Self {
        Self::new(futures::future::ready(value).boxed().shared(), now, ttl_ms)
    }

    // == Is Expired ==
    /// An entry is served only while its expiry is strictly in the future.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }
}

impl<V> fmt::Debug for CacheEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
