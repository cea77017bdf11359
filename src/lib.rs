//! Memocache - An in-memory TTL + LRU cache
//!
//! A thread-safe key/value cache for memoizing expensive lookups inside
//! a larger service. Entries are bounded two ways: a fixed capacity
//! evicts the least recently used entry on insert, and a background
//! sweep task drops entries whose last write is older than the TTL.
//!
//! # Usage
//! ```
//! use std::time::Duration;
//! use memocache::{spawn_sweep_task, Cache};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> memocache::Result<()> {
//! let cache: Cache<String, String> = Cache::new(Duration::from_secs(60), 1000)?;
//! let sweeper = spawn_sweep_task(cache.clone());
//!
//! cache.put("foo".to_string(), "bar".to_string()).await;
//! assert_eq!(cache.get(&"foo".to_string()).await, Some("bar".to_string()));
//!
//! sweeper.abort();
//! # Ok(())
//! # }
//! ```
//!
//! Reads promote an entry in the recency order but never extend its
//! TTL; expiry counts from the last write.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
