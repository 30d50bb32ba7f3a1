//! Compiled pattern caching
//!
//! This module maps pattern text plus compilation flags to a shared compiled
//! form, compiling on first access and evicting least-recently-used entries
//! beyond a fixed capacity.

pub mod cache;
pub mod compiler;
pub mod types;

pub use cache::PatternCache;
pub use compiler::{PatternCompiler, RegexCompiler};
pub use types::{AtomicCacheStats, CacheStats, PatternFlags, PatternKey};
