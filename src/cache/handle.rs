//! Shared Cache Handle
//!
//! Thread-safe wrapper around [`CacheStore`] for concurrent callers.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Cloneable handle to a shared cache.
///
/// Clones are cheap and all point at the same store. Every operation
/// runs under one exclusive lock: `get` reorders the recency list, so
/// it is a writer like everything else. A reader-writer lock that let
/// concurrent lookups run under shared access would race on the list
/// links.
///
/// The handle never starts the TTL sweep on its own; spawn it with
/// [`spawn_sweep_task`](crate::spawn_sweep_task) and keep the returned
/// handle to abort it on shutdown.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use memocache::Cache;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> memocache::Result<()> {
/// let cache: Cache<String, String> = Cache::new(Duration::from_secs(60), 1000)?;
///
/// cache.put("user:42".to_string(), "alice".to_string()).await;
/// assert_eq!(cache.get(&"user:42".to_string()).await, Some("alice".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Shared store behind the exclusive lock
    store: Arc<Mutex<CacheStore<K, V>>>,
    /// Construction parameters, immutable after validation
    config: CacheConfig,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructors ==
    /// Creates an empty cache with the given TTL and capacity.
    ///
    /// The sweep interval defaults to one second; use
    /// [`with_config`](Self::with_config) to override it.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidConfiguration`] for a zero capacity.
    ///
    /// [`CacheError::InvalidConfiguration`]: crate::CacheError::InvalidConfiguration
    pub fn new(ttl: Duration, capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(ttl, capacity))
    }

    /// Creates an empty cache from a full config.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidConfiguration`] if validation fails.
    ///
    /// [`CacheError::InvalidConfiguration`]: crate::CacheError::InvalidConfiguration
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let store = CacheStore::new(config.ttl, config.capacity);
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            config,
        })
    }

    // == Put ==
    /// Inserts or updates the mapping for `key`.
    ///
    /// Updating an existing key replaces its value and restarts its TTL.
    /// Inserting a new key at capacity evicts the least recently used
    /// entry.
    pub async fn put(&self, key: K, value: V) {
        let mut store = self.store.lock().await;
        store.put(key, value, Instant::now());
    }

    // == Get ==
    /// Looks up `key`, recording it as most recently used.
    ///
    /// Returns `None` for an absent key. A hit does not restart the
    /// entry's TTL; only writes do.
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut store = self.store.lock().await;
        store.get(key)
    }

    // == Contains ==
    /// Checks for `key` without touching the recency order.
    pub async fn contains_key(&self, key: &K) -> bool {
        let store = self.store.lock().await;
        store.contains_key(key)
    }

    // == Remove ==
    /// Removes the mapping for `key`, returning its value.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut store = self.store.lock().await;
        store.remove(key)
    }

    // == Clear ==
    /// Drops all entries.
    pub async fn clear(&self) {
        let mut store = self.store.lock().await;
        store.clear();
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        let store = self.store.lock().await;
        store.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.lock().await;
        store.is_empty()
    }

    // == Config ==
    /// The parameters this cache was constructed with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Sweep ==
    /// Runs one expiry pass, returning the number of entries removed.
    ///
    /// The background sweep task calls this on every tick. The clock is
    /// read after the lock is acquired, so entry timestamps and recency
    /// order advance together even under contention.
    pub(crate) async fn sweep_once(&self) -> usize {
        let mut store = self.store.lock().await;
        store.remove_expired(Instant::now())
    }
}
