//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - TTL Sweep: removes expired cache entries at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
