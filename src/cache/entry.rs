//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached mapping together with its TTL origin.
///
/// `last_touched` is set on insertion and on every update. Lookups never
/// refresh it, so expiry is governed purely by time since the last write
/// while recency of access only influences LRU victim choice.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// Lookup identity, mirrored in the store's index
    pub key: K,
    /// The stored value
    pub value: V,
    /// Timestamp of the last insert or update for this key
    pub last_touched: Instant,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an entry touched at `now`.
    pub fn new(key: K, value: V, now: Instant) -> Self {
        Self {
            key,
            value,
            last_touched: now,
        }
    }

    // == Update ==
    /// Replaces the value and resets the TTL origin to `now`.
    pub fn update(&mut self, value: V, now: Instant) {
        self.value = value;
        self.last_touched = now;
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry exactly `ttl` old is still live.
    /// Expiry requires strictly more than `ttl` to have elapsed since
    /// the last write.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.last_touched) > ttl
    }
}
