//! Lock-guarded pool handle for multi-threaded callers
//!
//! [`CircularPool`] itself is single-threaded. `SharedPool` supplies the
//! external mutual exclusion and an RAII guard that gives the instance back
//! when dropped.

use super::pool::CircularPool;
use crate::utils::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// A cloneable, thread-safe handle to a circular pool
pub struct SharedPool<T> {
    pool: Arc<Mutex<CircularPool<T>>>,
}

impl<T> Clone for SharedPool<T> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<T> SharedPool<T> {
    /// Create a new shared pool
    pub fn new<F>(capacity: usize, factory: F) -> Result<Self>
    where
        F: FnMut() -> T,
    {
        Ok(Self::from_pool(CircularPool::new(capacity, factory)?))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: CircularPool<T>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(pool)),
        }
    }

    /// Check out the longest-available instance
    ///
    /// Returns `None` when the pool is exhausted; never blocks waiting for a
    /// give-back.
    pub fn get(&self) -> Option<PooledObject<T>> {
        let obj = self.pool.lock().take()?;
        Some(PooledObject {
            obj: Some(obj),
            pool: Arc::clone(&self.pool),
        })
    }

    /// Return an instance taken with [`PooledObject::detach`]
    pub fn give_back(&self, item: T) -> std::result::Result<(), T> {
        self.pool.lock().give_back(item)
    }

    /// Number of instances currently owned by the pool
    pub fn available(&self) -> usize {
        self.pool.lock().available()
    }

    /// Total number of instances the pool was built with
    pub fn capacity(&self) -> usize {
        self.pool.lock().capacity()
    }
}

/// A checked-out instance that returns to its pool when dropped
pub struct PooledObject<T> {
    obj: Option<T>,
    pool: Arc<Mutex<CircularPool<T>>>,
}

impl<T> PooledObject<T> {
    /// Take the instance out of the guard; it will not be given back
    /// automatically
    pub fn detach(mut self) -> T {
        match self.obj.take() {
            Some(obj) => obj,
            // `obj` is only emptied here and in `drop`, both of which consume the guard
            None => unreachable!("pooled object already detached"),
        }
    }
}

impl<T> std::ops::Deref for PooledObject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match &self.obj {
            Some(obj) => obj,
            None => unreachable!("pooled object already detached"),
        }
    }
}

impl<T> std::ops::DerefMut for PooledObject<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.obj {
            Some(obj) => obj,
            None => unreachable!("pooled object already detached"),
        }
    }
}

impl<T> Drop for PooledObject<T> {
    fn drop(&mut self) {
        if let Some(obj) = self.obj.take() {
            let returned = self.pool.lock().give_back(obj);
            if let Err(rejected) = returned {
                debug!("Dropping pooled instance rejected by a full pool");
                drop(rejected);
            }
        }
    }
}
