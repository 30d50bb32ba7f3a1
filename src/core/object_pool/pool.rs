//! Fixed-capacity circular object pool
//!
//! All instances are built up front by a factory. `take` and `give_back` are
//! O(1) and never allocate: the slots form a ring in which the available
//! instances are the `available` slots immediately behind `tail`.

use crate::config::PoolConfig;
use crate::utils::error::{ReuseError, Result};
use std::fmt;
use tracing::{debug, warn};

/// A bounded FIFO recycler of pre-built instances
///
/// The pool does not track which instances are checked out. Callers are
/// expected to give back exactly what they took, once.
///
/// Not synchronized. Wrap it in [`SharedPool`](super::SharedPool) or another
/// lock when it has to cross threads.
pub struct CircularPool<T> {
    slots: Box<[Option<T>]>,
    /// Next write position, always in `[0, capacity)`
    tail: usize,
    /// Number of instances owned by the pool
    available: usize,
}

impl<T> CircularPool<T> {
    /// Create a pool of `capacity` instances, calling `factory` exactly
    /// `capacity` times
    pub fn new<F>(capacity: usize, mut factory: F) -> Result<Self>
    where
        F: FnMut() -> T,
    {
        if capacity == 0 {
            return Err(ReuseError::invalid_argument(
                "pool capacity must be greater than 0",
            ));
        }

        let slots: Box<[Option<T>]> = (0..capacity).map(|_| Some(factory())).collect();
        debug!("Created circular pool with {} instances", capacity);

        // A full ring: tail has wrapped back to slot 0, so the first take
        // reads slot 0 and the ring drains in construction order.
        Ok(Self {
            slots,
            tail: 0,
            available: capacity,
        })
    }

    /// Create a pool sized by configuration
    pub fn from_config<F>(config: &PoolConfig, factory: F) -> Result<Self>
    where
        F: FnMut() -> T,
    {
        Self::new(config.capacity, factory)
    }

    /// Remove and return the instance that has been available the longest
    ///
    /// Returns `None` when every instance is checked out.
    pub fn take(&mut self) -> Option<T> {
        if self.available == 0 {
            return None;
        }

        let head = self.head_index();
        let item = self.slots[head].take();
        debug_assert!(item.is_some(), "available slot {} was empty", head);
        self.available -= 1;
        item
    }

    /// Append `item` to the tail of the available queue
    ///
    /// When the pool already holds `capacity` instances the item is not
    /// stored and is handed back as `Err(item)`; the pool is left unchanged.
    /// Dropping the returned error discards the item.
    pub fn give_back(&mut self, item: T) -> std::result::Result<(), T> {
        if self.available == self.capacity() {
            warn!(
                "Pool is full ({} instances), rejecting returned instance",
                self.capacity()
            );
            return Err(item);
        }

        let previous = self.slots[self.tail].replace(item);
        debug_assert!(previous.is_none(), "tail slot {} was occupied", self.tail);
        self.tail = (self.tail + 1) % self.capacity();
        self.available += 1;
        Ok(())
    }

    /// Total number of instances the pool was built with
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of instances currently owned by the pool
    pub fn available(&self) -> usize {
        self.available
    }

    /// Number of instances currently checked out
    pub fn checked_out(&self) -> usize {
        self.capacity() - self.available
    }

    /// Whether the next `take` will return `None`
    pub fn is_exhausted(&self) -> bool {
        self.available == 0
    }

    /// Whether the next `give_back` will be rejected
    pub fn is_full(&self) -> bool {
        self.available == self.capacity()
    }

    fn head_index(&self) -> usize {
        let capacity = self.capacity();
        (self.tail + capacity - self.available) % capacity
    }
}

impl<T> fmt::Debug for CircularPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularPool")
            .field("capacity", &self.capacity())
            .field("available", &self.available)
            .field("tail", &self.tail)
            .finish()
    }
}
