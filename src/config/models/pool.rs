//! Object pool configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Object pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of instances built when the pool is created
    #[serde(default = "default_pool_capacity")]
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: default_pool_capacity(),
        }
    }
}

/// Partial pool configuration used as an override layer
///
/// Only fields that are `Some` replace the base value on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfigLayer {
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl From<PoolConfig> for PoolConfigLayer {
    fn from(config: PoolConfig) -> Self {
        Self {
            capacity: Some(config.capacity),
        }
    }
}

impl PoolConfig {
    /// Merge pool configurations (values set in `other` take precedence)
    pub fn merge(mut self, other: PoolConfigLayer) -> Self {
        if let Some(capacity) = other.capacity {
            self.capacity = capacity;
        }
        self
    }
}
