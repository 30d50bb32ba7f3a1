//! Configuration management for the reuse layer
//!
//! This module handles loading and validation of pool and pattern cache
//! sizing. Configuration can come from a YAML file or from environment
//! variables; either way it is validated before it is handed out.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ReuseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding the pool capacity
pub const ENV_POOL_CAPACITY: &str = "REUSE_POOL_CAPACITY";
/// Environment variable holding the pattern cache capacity
pub const ENV_PATTERN_CACHE_CAPACITY: &str = "REUSE_PATTERN_CACHE_CAPACITY";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Object pool configuration
    #[serde(default)]
    pub pool: PoolConfig,
    /// Pattern cache configuration
    #[serde(default)]
    pub pattern_cache: PatternCacheConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReuseError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ReuseError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup, falling back to defaults
    /// for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let layer = ConfigLayer {
            pool: PoolConfigLayer {
                capacity: parse_capacity(&lookup, ENV_POOL_CAPACITY)?,
            },
            pattern_cache: PatternCacheConfigLayer {
                capacity: parse_capacity(&lookup, ENV_PATTERN_CACHE_CAPACITY)?,
            },
        };

        let config = Self::default().merge(layer);
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.pool
            .validate()
            .map_err(|e| ReuseError::config(format!("Pool config error: {}", e)))?;

        self.pattern_cache
            .validate()
            .map_err(|e| ReuseError::config(format!("Pattern cache config error: {}", e)))?;

        Ok(())
    }

    /// Merge an override layer; every value it sets takes precedence
    ///
    /// A full `Config` converts into a layer with every field set.
    pub fn merge(mut self, other: ConfigLayer) -> Self {
        self.pool = self.pool.merge(other.pool);
        self.pattern_cache = self.pattern_cache.merge(other.pattern_cache);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ReuseError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

/// Partial configuration: only the values it sets override a base config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub pool: PoolConfigLayer,
    #[serde(default)]
    pub pattern_cache: PatternCacheConfigLayer,
}

impl ConfigLayer {
    /// Parse an override layer from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ReuseError::config(format!("Failed to parse config layer: {}", e)))
    }
}

impl From<Config> for ConfigLayer {
    fn from(config: Config) -> Self {
        Self {
            pool: config.pool.into(),
            pattern_cache: config.pattern_cache.into(),
        }
    }
}

fn parse_capacity<F>(lookup: &F, name: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<usize>().map(Some).map_err(|e| {
            ReuseError::config(format!(
                "{} must be a non-negative integer, got '{}': {}",
                name, raw, e
            ))
        }),
    }
}
