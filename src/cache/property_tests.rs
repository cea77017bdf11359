//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the eviction and expiry properties of the
//! cache core. Timestamps are handed to the store explicitly, so TTL
//! behavior is exercised without sleeping.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 50;
const TEST_TTL: Duration = Duration::from_secs(60);

// == Strategies ==
/// Generates cache keys (short, so collisions and updates happen)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}"
}

fn new_store() -> CacheStore<String, String> {
    CacheStore::new(TEST_TTL, TEST_CAPACITY)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of puts, the entry count never exceeds capacity.
    #[test]
    fn prop_capacity_never_exceeded(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..200)
    ) {
        let mut store = new_store();
        let now = Instant::now();

        for (key, value) in entries {
            store.put(key, value, now);
            prop_assert!(
                store.len() <= TEST_CAPACITY,
                "count {} exceeds capacity {}",
                store.len(),
                TEST_CAPACITY
            );
        }
    }

    // Filling the cache and adding one more key evicts exactly the
    // least recently inserted key.
    #[test]
    fn prop_oldest_key_is_evicted(
        initial_keys in prop::collection::vec(key_strategy(), 3..10),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(TEST_TTL, capacity);
        let now = Instant::now();

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key), now);
        }
        prop_assert_eq!(store.len(), capacity);

        store.put(new_key.clone(), new_value, now);

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains_key(&oldest_key));
        prop_assert!(store.contains_key(&new_key));
        for key in unique_keys.iter().skip(1) {
            prop_assert!(store.contains_key(key));
        }
    }

    // A key touched by a read stops being the eviction victim; the
    // next-oldest key takes its place.
    #[test]
    fn prop_touched_key_survives_eviction(
        keys in prop::collection::vec(key_strategy(), 3..8),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 3);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(TEST_TTL, capacity);
        let now = Instant::now();

        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key), now);
        }

        let touched = unique_keys[0].clone();
        let expected_victim = unique_keys[1].clone();
        store.get(&touched);

        store.put(new_key.clone(), new_value, now);

        prop_assert!(store.contains_key(&touched));
        prop_assert!(!store.contains_key(&expected_victim));
        prop_assert!(store.contains_key(&new_key));
    }

    // Rewriting an existing key keeps the count fixed and the latest
    // value wins.
    #[test]
    fn prop_update_keeps_count_and_latest_value(
        key in key_strategy(),
        values in prop::collection::vec(value_strategy(), 2..10)
    ) {
        let mut store = new_store();
        let now = Instant::now();

        for value in &values {
            store.put(key.clone(), value.clone(), now);
            prop_assert_eq!(store.len(), 1);
        }

        let last = values.last().cloned();
        prop_assert_eq!(store.get(&key), last);
    }

    // Reads never move an entry's expiry: however often a key is read,
    // it is swept once its last write is older than the TTL.
    #[test]
    fn prop_reads_never_extend_ttl(
        key in key_strategy(),
        value in value_strategy(),
        reads in 0usize..20
    ) {
        let mut store = new_store();
        let t0 = Instant::now();

        store.put(key.clone(), value, t0);

        for _ in 0..reads {
            prop_assert!(store.get(&key).is_some());
        }

        let removed = store.remove_expired(t0 + TEST_TTL + Duration::from_secs(1));
        prop_assert_eq!(removed, 1);
        prop_assert!(!store.contains_key(&key));
    }

    // A sweep removes exactly the entries whose last write is strictly
    // older than the TTL, regardless of where reads moved them in the
    // recency order.
    #[test]
    fn prop_sweep_removes_exactly_aged_entries(
        touch_offsets in prop::collection::vec(0u64..120, 1..30),
        cutoff_offset in 0u64..200
    ) {
        let t0 = Instant::now();
        let mut store: CacheStore<String, u64> = CacheStore::new(TEST_TTL, 200);

        // Insertion in offset order keeps recency aligned with age
        let mut sorted_offsets = touch_offsets;
        sorted_offsets.sort_unstable();
        for (i, offset) in sorted_offsets.iter().enumerate() {
            store.put(format!("key{}", i), *offset, t0 + Duration::from_secs(*offset));
        }

        let cutoff = t0 + Duration::from_secs(cutoff_offset);
        let expected_removed = sorted_offsets
            .iter()
            .filter(|&&offset| {
                cutoff_offset.saturating_sub(offset) > TEST_TTL.as_secs()
            })
            .count();

        let removed = store.remove_expired(cutoff);

        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(store.len(), sorted_offsets.len() - expected_removed);
    }
}
