//! Object pool integration tests
//!
//! Drives the pool the way a parser recycles per-document buffers.

#[cfg(test)]
mod tests {
    use crate::common::DocumentBuffer;
    use reuse_rs::{CircularPool, ReuseError, SharedPool};

    #[test]
    fn test_capacity_bounds_successful_takes() {
        let mut pool = CircularPool::new(3, DocumentBuffer::factory()).unwrap();

        let taken: Vec<_> = (0..4).map(|_| pool.take()).collect();
        assert_eq!(taken.iter().filter(|b| b.is_some()).count(), 3);
        assert!(taken[3].is_none());
    }

    #[test]
    fn test_drain_yields_construction_order() {
        let mut pool = CircularPool::new(5, DocumentBuffer::factory()).unwrap();

        let ids: Vec<usize> = std::iter::from_fn(|| pool.take()).map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_recycled_buffers_served_in_return_order() {
        let mut pool = CircularPool::new(4, DocumentBuffer::factory()).unwrap();
        let mut checked_out: Vec<_> = std::iter::from_fn(|| pool.take()).collect();

        // Documents finish out of order; buffers come back in completion order.
        let third = checked_out.remove(2);
        let first = checked_out.remove(0);
        pool.give_back(third).unwrap();
        pool.give_back(first).unwrap();

        assert_eq!(pool.take().map(|b| b.id), Some(2));
        assert_eq!(pool.take().map(|b| b.id), Some(0));
        assert!(pool.take().is_none());
    }

    #[test]
    fn test_buffer_contents_survive_reuse() {
        let mut pool = CircularPool::new(1, DocumentBuffer::factory()).unwrap();

        let mut buf = pool.take().unwrap();
        buf.text.push_str("<doc/>");
        pool.give_back(buf).unwrap();

        // The pool only controls reuse order; resetting state is the caller's job.
        let buf = pool.take().unwrap();
        assert_eq!(buf.text, "<doc/>");
    }

    #[test]
    fn test_over_return_hands_item_back() {
        let mut pool = CircularPool::new(2, DocumentBuffer::factory()).unwrap();
        let stray = DocumentBuffer {
            id: 99,
            text: String::new(),
        };

        let rejected = pool.give_back(stray).unwrap_err();
        assert_eq!(rejected.id, 99);
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_zero_capacity_is_invalid_argument() {
        let err = CircularPool::new(0, DocumentBuffer::factory()).unwrap_err();
        assert!(matches!(err, ReuseError::InvalidArgument(_)));
    }

    #[test]
    fn test_shared_pool_never_exceeds_capacity() {
        let pool = SharedPool::new(3, DocumentBuffer::factory()).unwrap();

        let a = pool.get().unwrap();
        let b = pool.get().unwrap();
        let c = pool.get().unwrap();
        assert!(pool.get().is_none());

        drop(b);
        let again = pool.get().unwrap();
        assert_eq!(again.id, 1);

        drop((a, c, again));
        assert_eq!(pool.available(), pool.capacity());
    }
}
