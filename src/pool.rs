use std::cell::Cell;

use crate::error::AllocError;

/// Default per-request budget, matching a typical 4k request pool.
pub const DEFAULT_POOL_SIZE: usize = 4096;

/// Request-scoped allocation budget.
///
/// Buffers handed out by the pool are owned by whatever the request builds
/// from them and are released together when the request is dropped. The pool
/// only tracks how much of its budget has been used.
///
/// # Examples
///
/// ```
/// use vrf_ext::RequestPool;
///
/// let pool = RequestPool::with_capacity(32);
/// let buf = pool.allocate(16).expect("fits");
/// assert_eq!(buf.len(), 16);
/// assert_eq!(pool.remaining(), 16);
/// assert!(pool.allocate(17).is_err());
/// ```
#[derive(Debug)]
pub struct RequestPool {
    capacity: usize,
    used: Cell<usize>,
}

impl RequestPool {
    /// Creates a pool with [`DEFAULT_POOL_SIZE`] bytes of budget.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_SIZE)
    }

    /// Creates a pool with the given budget in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            used: Cell::new(0),
        }
    }

    /// Takes `size` zeroed bytes from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if fewer than `size` bytes remain.
    pub fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        let available = self.remaining();
        if size > available {
            return Err(AllocError {
                requested: size,
                available,
            });
        }
        self.used.set(self.used.get() + size);
        Ok(vec![0; size])
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Total budget of the pool.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RequestPool {
    fn default() -> Self {
        Self::new()
    }
}
