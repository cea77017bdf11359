//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs an unbounded loop: sleep for the cache's configured
/// sweep interval, take the exclusive lock, drop every entry older than
/// the TTL. Each pass scans from the least recently used end and stops
/// at the first live entry, so a pass over a mostly-fresh cache touches
/// almost nothing.
///
/// The cache never starts this task itself; the embedding code spawns
/// it once per cache and owns its lifetime. The returned `JoinHandle`
/// is the stop signal: `abort()` cancels the task at its next
/// suspension point, so it cannot outlive a shutdown.
///
/// # Example
/// ```ignore
/// let cache: Cache<String, String> = Cache::new(ttl, 1000)?;
/// let sweeper = spawn_sweep_task(cache.clone());
/// // later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task<K, V>(cache: Cache<K, V>) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    let interval = cache.config().sweep_interval;

    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_once().await;

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
