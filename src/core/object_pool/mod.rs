//! Bounded object reuse
//!
//! This module provides a fixed-capacity circular pool of pre-built instances
//! and a lock-guarded handle for sharing one across threads.

pub mod pool;
pub mod shared;

pub use pool::CircularPool;
pub use shared::{PooledObject, SharedPool};
