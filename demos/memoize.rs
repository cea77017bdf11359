//! Demo: memoizing an expensive lookup behind the cache.
//!
//! Run with `cargo run --example memoize`.

use std::time::Duration;

use memocache::{spawn_sweep_task, Cache};

const TTL_SECS: u64 = 2;
const LOOKUP_DELAY_MS: u64 = 100;

/// Stand-in for a slow backend call.
async fn expensive_lookup(key: &str) -> String {
    tokio::time::sleep(Duration::from_millis(LOOKUP_DELAY_MS)).await;
    format!("value for {}", key)
}

async fn memoized_lookup(cache: &Cache<String, String>, key: &str) -> String {
    if let Some(value) = cache.get(&key.to_string()).await {
        println!("cache hit:  {}", key);
        return value;
    }
    println!("cache miss: {}", key);
    let value = expensive_lookup(key).await;
    cache.put(key.to_string(), value.clone()).await;
    value
}

#[tokio::main]
async fn main() -> memocache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memocache=debug".into()),
        )
        .init();

    let cache: Cache<String, String> = Cache::new(Duration::from_secs(TTL_SECS), 3)?;
    let sweeper = spawn_sweep_task(cache.clone());

    println!("First lookup pays the backend cost...");
    memoized_lookup(&cache, "alpha").await;

    println!("Second lookup is served from the cache...");
    memoized_lookup(&cache, "alpha").await;

    println!("Filling past capacity evicts the least recently used key...");
    memoized_lookup(&cache, "beta").await;
    memoized_lookup(&cache, "gamma").await;
    memoized_lookup(&cache, "delta").await;
    memoized_lookup(&cache, "alpha").await;

    println!("Waiting for the TTL sweep to drain everything...");
    tokio::time::sleep(Duration::from_secs(TTL_SECS + 2)).await;
    println!("entries left: {}", cache.len().await);

    sweeper.abort();
    Ok(())
}
