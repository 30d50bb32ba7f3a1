//! Core reuse components
//!
//! The object pool and the pattern cache are independent of each other; both
//! exist to avoid repeating expensive construction work.

pub mod object_pool;
pub mod pattern_cache;
