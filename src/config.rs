//! Configuration Module
//!
//! Cache construction parameters and their validation.

use std::time::Duration;

use crate::error::{CacheError, Result};

/// Interval between sweep passes unless the embedder overrides it.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

// == Cache Config ==
/// Cache construction parameters.
///
/// Fixed for the lifetime of the cache. Validation runs once at
/// construction; a config that passes `validate` cannot make any later
/// operation fail.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum age of an entry since its last write
    pub ttl: Duration,
    /// Maximum number of live entries
    pub capacity: usize,
    /// Interval between background sweep passes
    pub sweep_interval: Duration,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config with the given TTL and capacity.
    ///
    /// The sweep interval defaults to one second.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    // == Sweep Interval ==
    /// Overrides the interval between background sweep passes.
    ///
    /// A shorter interval tightens expiry precision at the cost of more
    /// frequent lock contention from the sweep task.
    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    // == Validate ==
    /// Rejects parameter values that would break eviction.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be a positive integer".to_string(),
            ));
        }
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "sweep interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(300), 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_uses_default_sweep_interval() {
        let config = CacheConfig::new(Duration::from_secs(60), 100);
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.capacity, 100);
        assert_eq!(config.sweep_interval, DEFAULT_SWEEP_INTERVAL);
    }

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.sweep_interval, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_sweep_interval_override() {
        let config =
            CacheConfig::new(Duration::from_secs(60), 100).sweep_interval(Duration::from_millis(250));
        assert_eq!(config.sweep_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let config = CacheConfig::new(Duration::from_secs(60), 0);
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_rejects_zero_sweep_interval() {
        let config =
            CacheConfig::new(Duration::from_secs(60), 100).sweep_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }
}
