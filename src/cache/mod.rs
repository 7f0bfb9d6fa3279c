//! Cache Module
//!
//! Expiring, request-coalescing cache for API responses.

mod clock;
mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, Cached};
pub use key::{canonical_key, sort_fields, CacheKey, Scalar};
pub use stats::{CacheStats, Lookup};
pub use store::ExpiringStore;

// == Public Constants ==
/// Default entry lifetime: 5 minutes.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;
