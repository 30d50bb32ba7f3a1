//! # reuse-rs
//!
//! Bounded resource reuse for high-throughput document processing.
//!
//! Two independent components amortize expensive construction work:
//!
//! - **Object pool**: a fixed-capacity circular FIFO of pre-built instances.
//!   `take` and `give_back` are O(1), never block and never allocate.
//! - **Pattern cache**: maps pattern text plus flags to a shared compiled
//!   form, compiling once per key and evicting least-recently-used entries
//!   beyond a capacity bound. Safe to share across threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use reuse_rs::{CircularPool, PatternCache, PatternFlags};
//! use std::sync::Arc;
//!
//! # fn main() -> reuse_rs::Result<()> {
//! let mut pool = CircularPool::new(4, || String::with_capacity(256))?;
//! let mut buf = pool.take().expect("pool starts full");
//! buf.push_str("scratch");
//! buf.clear();
//! let _ = pool.give_back(buf);
//!
//! let cache = Arc::new(PatternCache::new(128)?);
//! let re = cache.get_or_compile_with_flags("a.b", PatternFlags::CASE_INSENSITIVE)?;
//! assert!(re.is_match("AxB"));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, ReuseError};

pub use crate::core::object_pool::{CircularPool, PooledObject, SharedPool};
pub use crate::core::pattern_cache::{
    CacheStats, PatternCache, PatternCompiler, PatternFlags, PatternKey, RegexCompiler,
};
