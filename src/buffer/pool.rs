//! Thread-local buffer pool for efficient memory reuse.

use std::cell::RefCell;

/// Largest buffer capacity the pool will retain.
const MAX_POOLED_CAPACITY: usize = 256 * 1024;

/// Maximum number of buffers to keep per thread.
const MAX_POOL_SIZE: usize = 4;

/// A reusable read buffer of a fixed length.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool (or allocates one) and
    /// sizes it to `len` zeroed bytes.
    pub fn take(len: usize) -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut data = pool.borrow_mut().pop().unwrap_or_default();
            data.clear();
            data.resize(len, 0);
            Self { data }
        })
    }

    /// The writable slice a reader fills.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The readable slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Oversized buffers are dropped rather than pooled.
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
