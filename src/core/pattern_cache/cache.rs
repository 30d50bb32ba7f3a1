//! Bounded cache of compiled patterns
//!
//! Entries are keyed by `(pattern, flags)` and evicted least-recently-used
//! once the table reaches capacity. Compilation happens outside the table
//! lock, so one expensive pattern never stalls lookups of unrelated keys.

use super::compiler::{PatternCompiler, RegexCompiler};
use super::types::{AtomicCacheStats, CacheStats, PatternFlags, PatternKey};
use crate::config::PatternCacheConfig;
use crate::utils::error::{ReuseError, Result};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tracing::{debug, trace, warn};

/// Concurrent LRU cache of compiled patterns
///
/// Build one per host and share it through an `Arc`.
pub struct PatternCache<C: PatternCompiler = RegexCompiler> {
    entries: Mutex<LruCache<PatternKey, Arc<C::Compiled>>>,
    compiler: C,
    stats: AtomicCacheStats,
}

impl PatternCache<RegexCompiler> {
    /// Create a regex cache holding at most `capacity` compiled patterns
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_compiler(capacity, RegexCompiler::new())
    }

    /// Create a regex cache sized by configuration
    pub fn from_config(config: &PatternCacheConfig) -> Result<Self> {
        Self::new(config.capacity)
    }
}

impl<C: PatternCompiler> PatternCache<C> {
    /// Create a cache around a custom compiler
    pub fn with_compiler(capacity: usize, compiler: C) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            ReuseError::invalid_argument("pattern cache capacity must be greater than 0")
        })?;

        debug!("Created pattern cache with capacity {}", capacity);
        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            compiler,
            stats: AtomicCacheStats::default(),
        })
    }

    /// Get the compiled form of `pattern`, compiling it on first use
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<C::Compiled>> {
        self.get_or_compile_with_flags(pattern, PatternFlags::NONE)
    }

    /// Get the compiled form of `pattern` under `flags`, compiling it on
    /// first use
    ///
    /// A rejected pattern is not cached: the next call compiles it again.
    pub fn get_or_compile_with_flags(
        &self,
        pattern: &str,
        flags: PatternFlags,
    ) -> Result<Arc<C::Compiled>> {
        let key = PatternKey::new(pattern, flags);

        if let Some(compiled) = self.entries.lock().get(&key) {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Pattern cache hit for /{}/{}", pattern, flags);
            return Ok(Arc::clone(compiled));
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Pattern cache miss for /{}/{}, compiling", pattern, flags);

        let compiled = match self.compiler.compile(pattern, flags) {
            Ok(compiled) => Arc::new(compiled),
            Err(e) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                warn!("Failed to compile pattern /{}/{}: {}", pattern, flags, e);
                return Err(e);
            }
        };
        self.stats.compilations.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.lock();
        // Another caller may have compiled the same key meanwhile; keep theirs.
        if let Some(existing) = entries.get(&key) {
            return Ok(Arc::clone(existing));
        }
        if let Some((evicted, _)) = entries.push(key, Arc::clone(&compiled)) {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("Evicted pattern /{}/{} from cache", evicted.pattern, evicted.flags);
        }

        Ok(compiled)
    }

    /// Whether `(pattern, flags)` is cached, without refreshing its recency
    pub fn contains(&self, pattern: &str, flags: PatternFlags) -> bool {
        self.entries.lock().contains(&PatternKey::new(pattern, flags))
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no patterns
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of cached patterns
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    /// Drop every cached pattern
    ///
    /// Values already handed out stay valid; they are simply no longer shared
    /// with later lookups.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let removed = entries.len();
        entries.clear();
        debug!("Cleared {} patterns from cache", removed);
    }

    /// Get cache statistics (lock-free snapshot)
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Reset cache statistics
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// The compiler backing this cache
    pub fn compiler(&self) -> &C {
        &self.compiler
    }
}

impl<C: PatternCompiler> std::fmt::Debug for PatternCache<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("PatternCache")
            .field("len", &entries.len())
            .field("capacity", &entries.cap())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
