//! Utility modules
//!
//! Error types and logging setup shared by the pool and the pattern cache.

pub mod error;
pub mod logging;
