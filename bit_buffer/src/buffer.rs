//! Growable bit buffer backed by byte storage.
//!
//! # Examples
//!
//! ## Building a record
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buf = BitBuffer::new();
//! buf.append_fixed_width(5u8, 3);   // 101
//! buf.append_bit(true);             // 1
//! buf.append_fixed_width(0x2Au8, 8); // 00101010
//!
//! assert_eq!(buf.len(), 12);
//! assert_eq!(buf.as_bytes(), &[0b1011_0010, 0b1010_0000]);
//! assert_eq!(buf.read_unsigned(4, 8).unwrap(), 0x2A);
//! ```
//!
//! ## Extracting a field
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let buf = BitBuffer::from_bytes(&[0b1001_0110, 0b0010_1100, 0b0100_1001], 24);
//! let field = buf.slice(6, 7).unwrap();
//!
//! assert_eq!(field.len(), 7);
//! assert_eq!(field.to_string(), "[1000101-]");
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::hash::{Hash, Hasher};

use bytemuck::Pod;

use crate::bit_ops::{bit_len, bit_mask, bytes_for_bits, keep_mask, shift_bytes_left};
use crate::log::{debug, trace};
use crate::{BitBufferConfig, BitBufferError, Cursor, Result};

/// A sequence of bits stored MSB-first in bytes.
///
/// `len()` is the exact number of meaningful bits. Storage always holds the
/// minimum number of bytes for that length, and bits past the end read as
/// zero. Equality and hashing only look at the first `len()` bits, so a
/// [`set`](Self::set) into spare capacity does not make two buffers differ.
#[derive(Clone, Default)]
pub struct BitBuffer {
    storage: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Creates an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let buf = BitBuffer::new();
    /// assert_eq!(buf.len(), 0);
    /// assert!(buf.as_bytes().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
        }
    }

    /// Creates a buffer holding the first `bit_len` bits of `bytes`.
    ///
    /// Missing bytes are zero-filled; surplus bytes are dropped.
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Self {
        Self::from_parts(bytes.to_vec(), bit_len)
    }

    pub fn with_config(config: BitBufferConfig) -> Self {
        let bit_len = config.resolved_bit_length();
        Self::from_parts(config.initial_bytes, bit_len)
    }

    /// Creates a buffer from the raw byte view of plain-old-data values.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let buf = BitBuffer::from_pod(&[0x0102u16.to_be()]);
    /// assert_eq!(buf.len(), 16);
    /// assert_eq!(buf.read_unsigned(0, 16).unwrap(), 0x0102);
    /// ```
    pub fn from_pod<T: Pod>(values: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        Self::from_bytes(bytes, bytes.len() * 8)
    }

    fn from_parts(mut storage: Vec<u8>, len: usize) -> Self {
        let needed = bytes_for_bits(len);
        if storage.len() < needed {
            storage.resize(needed, 0);
        }
        let mut buf = Self { storage, len };
        buf.trim();
        buf
    }

    /// Number of meaningful bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed representation.
    ///
    /// Unused bits in the last byte are zero unless [`set`](Self::set) wrote
    /// to index `len()`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.storage
    }

    /// Bits of storage currently allocated.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.storage.len() * 8
    }

    /// Unused bits left in the last byte before another byte is needed.
    #[inline]
    pub fn spare_bits(&self) -> usize {
        self.capacity_bits() - self.len
    }

    /// Removes every bit.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.len = 0;
    }

    /// Returns `true` if bit `index` is set.
    ///
    /// Indices at or past `len()` read as `false`.
    pub fn test(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.storage
            .get(index / 8)
            .is_some_and(|byte| byte & bit_mask(index % 8) != 0)
    }

    /// Sets bit `index` to 1 in place.
    ///
    /// This is a raw toggle, not an append: it never changes `len()`.
    /// `index == len()` writes into spare capacity if the last byte has any;
    /// anything further is ignored.
    pub fn set(&mut self, index: usize) {
        if let Some(byte) = self.raw_byte_mut(index) {
            *byte |= bit_mask(index % 8);
        }
    }

    /// Clears bit `index` in place. Same bounds rules as [`set`](Self::set).
    pub fn unset(&mut self, index: usize) {
        if let Some(byte) = self.raw_byte_mut(index) {
            *byte &= !bit_mask(index % 8);
        }
    }

    /// Whole bytes of storage, plus the last byte masked to its used bits.
    fn masked_bytes(&self) -> (&[u8], Option<u8>) {
        match self.len % 8 {
            0 => (&self.storage, None),
            used => match self.storage.split_last() {
                Some((last, head)) => (head, Some(last & keep_mask(used))),
                None => (&self.storage, None),
            },
        }
    }

    fn raw_byte_mut(&mut self, index: usize) -> Option<&mut u8> {
        if index > self.len {
            return None;
        }
        self.storage.get_mut(index / 8)
    }

    /// Appends a single bit.
    pub fn append_bit(&mut self, bit: bool) {
        self.grow();
        let index = self.len;
        if bit {
            self.set(index);
        } else {
            self.unset(index);
        }
        self.len += 1;
    }

    /// Appends `value` in its minimal big-endian form, leading zeros stripped.
    ///
    /// Zero is written as a single `0` bit. Returns the number of bits written.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buf = BitBuffer::new();
    /// assert_eq!(buf.append_value(1u8), 1);
    /// assert_eq!(buf.append_value(128u8), 8);
    /// assert_eq!(buf.append_value(23u8), 5);
    /// assert_eq!(buf.as_bytes(), &[0b1100_0000, 0b0101_1100]);
    /// ```
    pub fn append_value(&mut self, value: impl Into<u64>) -> usize {
        let value = value.into();
        if value == 0 {
            self.append_bit(false);
            return 1;
        }
        let used = bit_len(value);
        for i in (0..used).rev() {
            self.append_bit((value >> i) & 1 == 1);
        }
        used
    }

    /// Appends `value` as exactly `width` bits.
    ///
    /// Short values are left-padded with zeros. Values wider than `width`
    /// keep their `width` most significant bits; the low-order bits are
    /// discarded. Returns `width`.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buf = BitBuffer::new();
    /// buf.append_fixed_width(0b11u8, 4);      // 0011
    /// buf.append_fixed_width(0b1011_0110u8, 3); // truncated to 101
    /// assert_eq!(buf.to_string(), "[0011101-]");
    /// ```
    pub fn append_fixed_width(&mut self, value: impl Into<u64>, width: usize) -> usize {
        let value = value.into();
        if width == 0 {
            return 0;
        }
        let natural = bit_len(value);
        if natural > width {
            debug!(value, width, natural, "truncating fixed-width value");
            return self.append_value(value >> (natural - width));
        }
        let mut written = self.pad(width - natural);
        if natural != 0 {
            written += self.append_value(value);
        }
        written
    }

    /// Appends `n` zero bits. Returns `n`.
    pub fn pad(&mut self, n: usize) -> usize {
        for _ in 0..n {
            self.append_bit(false);
        }
        n
    }

    /// Appends the bits of `other` after the bits of `self`.
    pub fn append(&mut self, other: &BitBuffer) {
        let needed = bytes_for_bits(self.len + other.len);
        self.storage.reserve(needed.saturating_sub(self.storage.len()));
        for bit in other.iter() {
            self.append_bit(bit);
        }
    }

    /// Appends every buffer in `others`, in order.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let parts = [
    ///     BitBuffer::from_bytes(&[0xF0], 4),
    ///     BitBuffer::from_bytes(&[0x00], 4),
    ///     BitBuffer::from_bytes(&[0xA0], 4),
    /// ];
    /// let mut buf = BitBuffer::new();
    /// buf.append_all(&parts);
    /// assert_eq!(buf.as_bytes(), &[0xF0, 0xA0]);
    /// ```
    pub fn append_all<'a>(&mut self, others: impl IntoIterator<Item = &'a BitBuffer>) {
        for other in others {
            self.append(other);
        }
    }

    /// Copies bits `start..start + length` into a new buffer.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::OutOfRange`] if `start >= len()` or if the range ends
    /// past the stored bytes. A range ending inside the spare bits of the
    /// last byte is allowed and reads those bits as zero.
    pub fn slice(&self, start: usize, length: usize) -> Result<BitBuffer> {
        if start >= self.len {
            debug!(start, length, len = self.len, "slice start out of range");
            return Err(BitBufferError::OutOfRange {
                start,
                length,
                available: self.len,
            });
        }
        let end_byte = start
            .checked_add(length)
            .map(bytes_for_bits)
            .filter(|&end| end <= self.storage.len())
            .ok_or_else(|| {
                debug!(start, length, stored = self.storage.len(), "slice end out of range");
                BitBufferError::OutOfRange {
                    start,
                    length,
                    available: self.capacity_bits(),
                }
            })?;

        let start_byte = start / 8;
        let mut storage = self.storage[start_byte..end_byte].to_vec();
        shift_bytes_left(&mut storage, start % 8);

        let mut out = BitBuffer {
            storage,
            len: length,
        };
        out.trim();
        Ok(out)
    }

    /// Reads bits `start..start + length` as a big-endian unsigned integer.
    ///
    /// Ranges longer than 64 bits keep the low-order 64 bits of the value.
    ///
    /// # Errors
    ///
    /// Same as [`slice`](Self::slice).
    pub fn read_unsigned(&self, start: usize, length: usize) -> Result<u64> {
        let field = self.slice(start, length)?;
        let spare = field.spare_bits();
        let raw = field
            .storage
            .iter()
            .fold(0u128, |acc, &byte| (acc << 8) | byte as u128);
        Ok((raw >> spare) as u64)
    }

    /// Shifts every bit left by `n`, dropping the first `n` bits.
    ///
    /// `n` is clamped to `len()`; the buffer shrinks by the clamped amount.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buf = BitBuffer::from_bytes(&[0b1111_0000, 0b0000_0001], 16);
    /// buf.shift_left(4);
    /// assert_eq!(buf.len(), 12);
    /// assert_eq!(buf.as_bytes(), &[0b0000_0000, 0b0001_0000]);
    /// ```
    pub fn shift_left(&mut self, n: usize) {
        let n = n.min(self.len);
        trace!(n, len = self.len, "shift left");
        shift_bytes_left(&mut self.storage, n);
        self.len -= n;
        self.trim();
    }

    /// Iterates over the bits in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            index: 0,
        }
    }

    /// Starts a [`Cursor`] at bit 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Makes room for one more bit.
    fn grow(&mut self) {
        if self.spare_bits() == 0 {
            self.storage.push(0);
        }
    }

    /// Drops bytes not needed for `len` bits and zeroes the tail of the last byte.
    fn trim(&mut self) {
        self.storage.truncate(bytes_for_bits(self.len));
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.storage.last_mut() {
                *last &= keep_mask(used);
            }
        }
    }
}

impl fmt::Display for BitBuffer {
    /// Bits grouped by byte, with unused capacity shown as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for pos in 0..self.capacity_bits() {
            if pos > 0 && pos % 8 == 0 {
                f.write_str(" ")?;
            }
            let c = if pos >= self.len {
                "-"
            } else if self.test(pos) {
                "1"
            } else {
                "0"
            };
            f.write_str(c)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len)
            .field("bits", &format_args!("{}", self))
            .finish()
    }
}

impl PartialEq for BitBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.masked_bytes() == other.masked_bytes()
    }
}

impl Eq for BitBuffer {}

impl Hash for BitBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.masked_bytes().hash(state);
    }
}

impl From<BitBufferConfig> for BitBuffer {
    fn from(config: BitBufferConfig) -> Self {
        Self::with_config(config)
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        for bit in bits {
            self.append_bit(bit);
        }
    }
}

impl<'a> Extend<&'a BitBuffer> for BitBuffer {
    fn extend<I: IntoIterator<Item = &'a BitBuffer>>(&mut self, others: I) {
        self.append_all(others);
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut buf = BitBuffer::new();
        buf.extend(bits);
        buf
    }
}

pub struct Iter<'a> {
    buffer: &'a BitBuffer,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.buffer.len() {
            None
        } else {
            let bit = self.buffer.test(self.index);
            self.index += 1;
            Some(bit)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
