//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key canonicalization and store semantics over
//! generated inputs.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::cache::{canonical_key, CacheKey, ExpiringStore, ManualClock};

// == Test Configuration ==
const TEST_TTL: u64 = 1_000;

// == Strategies ==
/// Generates field names
fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}".prop_map(|s| s)
}

/// Generates scalar keys
fn scalar_strategy() -> impl Strategy<Value = CacheKey> {
    prop_oneof![
        Just(CacheKey::null()),
        any::<bool>().prop_map(CacheKey::from),
        any::<i64>().prop_map(CacheKey::from),
        "[a-zA-Z0-9 /?=&]{0,24}".prop_map(CacheKey::from),
    ]
}

/// Generates records with unique field names, in generation order
fn record_fields_strategy() -> impl Strategy<Value = Vec<(String, CacheKey)>> {
    prop::collection::hash_map(field_name_strategy(), scalar_strategy(), 0..8)
        .prop_map(|map: HashMap<String, CacheKey>| map.into_iter().collect())
}

/// Generates arbitrary keys up to a small depth
fn key_strategy() -> impl Strategy<Value = CacheKey> {
    scalar_strategy().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(CacheKey::Sequence),
            prop::collection::vec((field_name_strategy(), inner), 0..6)
                .prop_map(|fields| CacheKey::record(fields)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Reordering the fields of a record never changes its canonical key.
    #[test]
    fn prop_record_order_independence(
        fields in record_fields_strategy(),
        seed in any::<u64>()
    ) {
        let mut shuffled = fields.clone();
        // Deterministic rotation plus reversal covers many permutations
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            if seed % 2 == 0 {
                shuffled.reverse();
            }
        }

        let original = CacheKey::Record(fields);
        let permuted = CacheKey::Record(shuffled);
        prop_assert_eq!(canonical_key(&original), canonical_key(&permuted));

        let in_seq = CacheKey::sequence([CacheKey::from("/path"), original]);
        let in_seq_permuted = CacheKey::sequence([CacheKey::from("/path"), permuted]);
        prop_assert_eq!(canonical_key(&in_seq), canonical_key(&in_seq_permuted));
    }

    // A plain string is its own canonical key.
    #[test]
    fn prop_string_key_verbatim(s in ".{0,64}") {
        prop_assert_eq!(canonical_key(&CacheKey::from(s.clone())), s);
    }

    // Canonicalization is total and yields valid JSON for non-string keys.
    #[test]
    fn prop_canonical_is_json(key in key_strategy()) {
        let canonical = canonical_key(&key);
        if !matches!(key, CacheKey::Scalar(crate::cache::Scalar::String(_))) {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(&canonical);
            prop_assert!(parsed.is_ok(), "Not JSON: {}", canonical);
            prop_assert!(parsed.unwrap().is_array());
        }
    }

    // A primed value is served without computing.
    #[test]
    fn prop_set_then_get(key in key_strategy(), value in any::<i64>()) {
        let store = ExpiringStore::with_clock(TEST_TTL, Arc::new(ManualClock::new(0)));
        let calls = Arc::new(AtomicUsize::new(0));

        store.set(key.clone(), value);
        let counter = calls.clone();
        let got = tokio_test::block_on(store.get(key, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(value.wrapping_add(1))
        }));

        prop_assert_eq!(got, value);
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // Invalidating one key leaves every other key cached.
    #[test]
    fn prop_invalidate_isolation(
        keys in prop::collection::hash_set("[a-z]{1,8}", 2..10),
        victim_index in any::<prop::sample::Index>()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let victim = victim_index.get(&keys).clone();
        let store = ExpiringStore::with_clock(TEST_TTL, Arc::new(ManualClock::new(0)));

        for key in &keys {
            store.set(key.as_str(), key.len());
        }
        store.invalidate(victim.as_str());

        for key in &keys {
            prop_assert_eq!(store.contains(key.as_str()), *key != victim);
        }
        prop_assert_eq!(store.len(), keys.len() - 1);
    }
}

// Separate block for expiry with a simulated clock
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Entries are served strictly before `ttl` has elapsed, and recomputed after.
    #[test]
    fn prop_ttl_expiration_behavior(ttl in 1u64..10_000, elapsed in 0u64..20_000) {
        let clock = Arc::new(ManualClock::new(0));
        let store = ExpiringStore::with_clock(ttl, clock.clone());
        let calls = Arc::new(AtomicUsize::new(0));

        store.set("key", 0u64);
        clock.advance(elapsed);

        let counter = calls.clone();
        let got = tokio_test::block_on(store.get("key", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(1u64)
        }));

        if elapsed < ttl {
            prop_assert_eq!(got, 0);
            prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        } else {
            prop_assert_eq!(got, 1);
            prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }
}
