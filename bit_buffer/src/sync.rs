//! Lock-guarded [`BitBuffer`] for sharing between threads.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use bit_buffer::SharedBitBuffer;
//!
//! let shared = Arc::new(SharedBitBuffer::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             shared.append_fixed_width(0xAu8, 4);
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(shared.len(), 16);
//! assert_eq!(shared.read_unsigned(0, 16).unwrap(), 0xAAAA);
//! ```

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{BitBuffer, Result};

/// A [`BitBuffer`] behind a reader/writer lock.
///
/// Readers run concurrently; every mutation takes the lock exclusively.
#[derive(Debug, Default)]
pub struct SharedBitBuffer {
    inner: RwLock<BitBuffer>,
}

impl SharedBitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&BitBuffer) -> R) -> R {
        f(&self.read_guard())
    }

    /// Runs `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut BitBuffer) -> R) -> R {
        f(&mut self.write_guard())
    }

    // A poisoned lock still holds a consistent buffer.
    fn read_guard(&self) -> RwLockReadGuard<'_, BitBuffer> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, BitBuffer> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    pub fn test(&self, index: usize) -> bool {
        self.read_guard().test(index)
    }

    pub fn set(&self, index: usize) {
        self.write_guard().set(index)
    }

    pub fn unset(&self, index: usize) {
        self.write_guard().unset(index)
    }

    pub fn append_bit(&self, bit: bool) {
        self.write_guard().append_bit(bit)
    }

    pub fn append_value(&self, value: impl Into<u64>) -> usize {
        self.write_guard().append_value(value)
    }

    pub fn append_fixed_width(&self, value: impl Into<u64>, width: usize) -> usize {
        self.write_guard().append_fixed_width(value, width)
    }

    pub fn pad(&self, n: usize) -> usize {
        self.write_guard().pad(n)
    }

    pub fn append(&self, other: &BitBuffer) {
        self.write_guard().append(other)
    }

    /// Appends every buffer in `others` under one lock.
    pub fn append_all<'a>(&self, others: impl IntoIterator<Item = &'a BitBuffer>) {
        self.write_guard().append_all(others)
    }

    pub fn shift_left(&self, n: usize) {
        self.write_guard().shift_left(n)
    }

    pub fn slice(&self, start: usize, length: usize) -> Result<BitBuffer> {
        self.read_guard().slice(start, length)
    }

    pub fn read_unsigned(&self, start: usize, length: usize) -> Result<u64> {
        self.read_guard().read_unsigned(start, length)
    }

    /// Clones the current contents.
    pub fn snapshot(&self) -> BitBuffer {
        self.read_guard().clone()
    }

    pub fn into_inner(self) -> BitBuffer {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<BitBuffer> for SharedBitBuffer {
    fn from(buffer: BitBuffer) -> Self {
        Self {
            inner: RwLock::new(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BitBufferError, Whence};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn wraps_buffer_operations() {
        let shared = SharedBitBuffer::from(BitBuffer::from_bytes(&[0xF0], 4));
        shared.append_bit(true);
        assert_eq!(shared.len(), 5);
        assert!(shared.test(4));

        shared.shift_left(1);
        assert_eq!(shared.len(), 4);
        assert_eq!(shared.read_unsigned(0, 4), Ok(0xF));
        assert!(matches!(
            shared.slice(9, 1),
            Err(BitBufferError::OutOfRange { .. })
        ));

        let snapshot = shared.snapshot();
        shared.pad(4);
        assert_eq!(snapshot.len(), 4);
        assert_eq!(shared.into_inner().len(), 8);
    }

    #[test]
    fn append_all_under_one_lock() {
        let shared = SharedBitBuffer::new();
        let parts = vec![
            BitBuffer::from_bytes(&[0xF0], 4),
            BitBuffer::from_bytes(&[0x00], 4),
            BitBuffer::from_bytes(&[0xA0], 4),
        ];
        shared.append_all(&parts);
        assert_eq!(shared.len(), 12);
        assert_eq!(shared.snapshot().as_bytes(), &[0xF0, 0xA0]);
    }

    #[test]
    fn cursor_over_read_access() {
        let shared = SharedBitBuffer::from(BitBuffer::from_bytes(&[0xF0, 0x01], 16));
        let value = shared.read(|buf| {
            let mut c = buf.cursor();
            c.seek(8, Whence::Start)?;
            c.read_bits(8)
        });
        assert_eq!(value, Ok(1));
    }

    #[test]
    fn concurrent_appends() {
        let shared = Arc::new(SharedBitBuffer::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.append_value(1u8);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.len(), 800);
        assert!(shared.read(|buf| buf.iter().all(|bit| bit)));
    }

    #[test]
    fn write_closure() {
        let shared = SharedBitBuffer::new();
        let written = shared.write(|buf| buf.append_fixed_width(3u8, 8));
        assert_eq!(written, 8);
        shared.set(0);
        shared.unset(7);
        assert_eq!(shared.snapshot().as_bytes(), &[0b1000_0010]);
    }
}
