//! Configuration data models
//!
//! This module defines the configuration structures of the reuse layer.

pub mod pattern_cache;
pub mod pool;

// Re-export all configuration types
pub use pattern_cache::*;
pub use pool::*;

/// Default number of pooled instances
pub fn default_pool_capacity() -> usize {
    16
}

/// Default number of cached compiled patterns
pub fn default_pattern_cache_capacity() -> usize {
    500
}
