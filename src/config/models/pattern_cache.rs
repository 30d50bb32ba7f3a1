//! Pattern cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Pattern cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCacheConfig {
    /// Maximum number of compiled patterns kept
    #[serde(default = "default_pattern_cache_capacity")]
    pub capacity: usize,
}

impl Default for PatternCacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_pattern_cache_capacity(),
        }
    }
}

/// Partial pattern cache configuration used as an override layer
///
/// Only fields that are `Some` replace the base value on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCacheConfigLayer {
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl From<PatternCacheConfig> for PatternCacheConfigLayer {
    fn from(config: PatternCacheConfig) -> Self {
        Self {
            capacity: Some(config.capacity),
        }
    }
}

impl PatternCacheConfig {
    /// Merge pattern cache configurations (values set in `other` take precedence)
    pub fn merge(mut self, other: PatternCacheConfigLayer) -> Self {
        if let Some(capacity) = other.capacity {
            self.capacity = capacity;
        }
        self
    }
}
