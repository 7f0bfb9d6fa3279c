//! Cache Statistics Module
//!
//! Counts how lookups against the store were answered.

use serde::Serialize;

/// Outcome of a single `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// An unexpired entry was shared
    Hit,
    /// No entry existed; a computation was started
    Miss,
    /// The entry had lapsed; a computation was started
    Expired,
}

// == Cache Stats ==
/// Snapshot of store activity since creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered by an existing, unexpired entry
    pub hits: u64,
    /// Lookups that started a new computation, lapsed entries included
    pub misses: u64,
    /// The subset of misses caused by a lapsed entry
    pub expirations: u64,
    /// Entries removed by `invalidate` or `clear`
    pub invalidations: u64,
    /// Entries held when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of lookups served from the cache; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record(&mut self, lookup: Lookup) {
        match lookup {
            Lookup::Hit => self.hits += 1,
            Lookup::Miss => self.misses += 1,
            Lookup::Expired => {
                self.misses += 1;
                self.expirations += 1;
            }
        }
    }

    pub fn record_removed(&mut self, count: usize) {
        self.invalidations += count as u64;
    }
}
