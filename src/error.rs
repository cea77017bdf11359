//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Normal cache operations cannot fail: a lookup on a missing key is an
/// expected outcome signaled by `None`, not an error. The only failure
/// mode is a malformed construction argument, rejected up front so it
/// never surfaces as undefined eviction behavior later.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Construction parameters that would break the cache
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
