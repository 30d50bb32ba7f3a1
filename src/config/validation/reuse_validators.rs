//! Pool and pattern cache configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for PoolConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Pool capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for PatternCacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Pattern cache capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}
