//! Cache Store Module
//!
//! Single-threaded cache core combining the key index with the recency
//! list. Thread safety lives one level up in [`Cache`](crate::Cache),
//! which wraps the store in an exclusive lock.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, RecencyList};

// == Cache Store ==
/// Cache core with LRU eviction and TTL expiry.
///
/// The recency list holds the entries themselves; `index` maps each key
/// to its slot in the list. Both structures are always mutated together,
/// so a key is in the index exactly when its entry is linked in the
/// list.
///
/// The store never reads the clock. Every operation that stamps or
/// inspects entry age takes `now` from the caller; `Cache` reads the
/// clock once per operation, after taking the lock.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Entries in most-to-least-recently-used order
    list: RecencyList<CacheEntry<K, V>>,
    /// Key to list slot; never exposed
    index: HashMap<K, usize>,
    /// Maximum entry age since last write
    ttl: Duration,
    /// Maximum number of live entries
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty store with the given TTL and capacity.
    ///
    /// Capacity is taken as already validated; construct through
    /// [`Cache`](crate::Cache) or [`CacheConfig`](crate::CacheConfig)
    /// to get the positive-capacity check.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            list: RecencyList::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            ttl,
            capacity,
        }
    }

    // == Put ==
    /// Inserts or updates the mapping for `key`, touched at `now`.
    ///
    /// An existing key keeps its slot: the value is replaced, the TTL
    /// origin resets, and the entry moves to the front. A new key is
    /// linked at the front; if that pushes the count past capacity, the
    /// back-most entry is evicted. The just-inserted entry sits at the
    /// front, so it is never the victim.
    pub fn put(&mut self, key: K, value: V, now: Instant) {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(slot) {
                entry.update(value, now);
            }
            self.list.move_to_front(slot);
            return;
        }

        let slot = self.list.push_front(CacheEntry::new(key.clone(), value, now));
        self.index.insert(key, slot);

        if self.list.len() > self.capacity {
            if let Some(evicted) = self.list.pop_back() {
                self.index.remove(&evicted.key);
            }
        }
    }

    // == Get ==
    /// Looks up `key`, recording it as most recently used.
    ///
    /// Returns `None` for an absent key. A hit moves the entry to the
    /// front of the recency order but does not refresh `last_touched`:
    /// reads never extend an entry's lifetime.
    pub fn get(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let &slot = self.index.get(key)?;
        self.list.move_to_front(slot);
        self.list.get(slot).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Checks for `key` without touching the recency order.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Remove ==
    /// Removes the mapping for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        self.list.remove(slot).map(|entry| entry.value)
    }

    // == Remove Expired ==
    /// Drops every entry older than the TTL as of `now`.
    ///
    /// Scans from the back of the recency list and stops at the first
    /// live entry. Any touch also moves an entry frontward, so every
    /// entry behind the first live one is at least as stale; the early
    /// stop cannot strand an expired entry.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self, now: Instant) -> usize {
        let mut removed = 0;

        while self
            .list
            .back()
            .is_some_and(|entry| entry.is_expired(self.ttl, now))
        {
            if let Some(evicted) = self.list.pop_back() {
                self.index.remove(&evicted.key);
                removed += 1;
            }
        }

        removed
    }

    // == Clear ==
    /// Drops all entries.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Accessors ==
    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum entry age since last write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Keys from most to least recently used, for order assertions.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<K> {
        self.list.iter().map(|entry| entry.key.clone()).collect()
    }
}
