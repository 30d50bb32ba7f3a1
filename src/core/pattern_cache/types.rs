//! Pattern cache type definitions
//!
//! This module contains the compilation flags, the cache key and the
//! statistics types used by the pattern cache.

use crate::utils::error::{ReuseError, Result};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Compilation options for a pattern
///
/// Bit values follow the conventional regex flag numbering so that integer
/// flags handed over by callers keep their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternFlags(u32);

impl PatternFlags {
    /// No options
    pub const NONE: Self = Self(0);
    /// Case-insensitive matching
    pub const CASE_INSENSITIVE: Self = Self(0x02);
    /// Whitespace and `#` comments in the pattern are ignored
    pub const COMMENTS: Self = Self(0x04);
    /// `^` and `$` match at line boundaries
    pub const MULTILINE: Self = Self(0x08);
    /// The pattern text is matched literally
    pub const LITERAL: Self = Self(0x10);
    /// `.` matches line terminators
    pub const DOTALL: Self = Self(0x20);

    const ALL: u32 = 0x02 | 0x04 | 0x08 | 0x10 | 0x20;

    /// Build flags from their raw bit representation
    ///
    /// Unknown bits are rejected rather than silently ignored, so two keys
    /// can never differ only in bits the compiler does not look at.
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & !Self::ALL != 0 {
            return Err(ReuseError::invalid_argument(format!(
                "unknown pattern flag bits: {:#x}",
                bits & !Self::ALL
            )));
        }
        Ok(Self(bits))
    }

    /// Parse XPath-style flag letters (`s`, `m`, `i`, `x`, `q`)
    pub fn parse(flags: &str) -> Result<Self> {
        flags.chars().try_fold(Self::NONE, |acc, c| {
            let flag = match c {
                's' => Self::DOTALL,
                'm' => Self::MULTILINE,
                'i' => Self::CASE_INSENSITIVE,
                'x' => Self::COMMENTS,
                'q' => Self::LITERAL,
                other => {
                    return Err(ReuseError::invalid_argument(format!(
                        "invalid pattern flag '{}' in \"{}\"",
                        other, flags
                    )));
                }
            };
            Ok(acc | flag)
        })
    }

    /// Raw bit representation
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for PatternFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PatternFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [(PatternFlags, char); 5] = [
            (PatternFlags::DOTALL, 's'),
            (PatternFlags::MULTILINE, 'm'),
            (PatternFlags::CASE_INSENSITIVE, 'i'),
            (PatternFlags::COMMENTS, 'x'),
            (PatternFlags::LITERAL, 'q'),
        ];
        for (flag, letter) in LETTERS {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Cache key: the pattern text together with its compilation flags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    /// Pattern source text
    pub pattern: Arc<str>,
    /// Compilation flags
    pub flags: PatternFlags,
}

impl PatternKey {
    /// Create a new key
    pub fn new(pattern: &str, flags: PatternFlags) -> Self {
        Self {
            pattern: Arc::from(pattern),
            flags,
        }
    }
}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Lookups served from the table
    pub hits: AtomicU64,
    /// Lookups that had to compile
    pub misses: AtomicU64,
    /// Successful compilations
    pub compilations: AtomicU64,
    /// Rejected patterns
    pub failures: AtomicU64,
    /// Entries removed to make room
    pub evictions: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub compilations: u64,
    pub failures: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            compilations: self.compilations.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.compilations.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}
