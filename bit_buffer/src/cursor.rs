//! Position-tracking reader over a [`BitBuffer`].
//!
//! ```rust
//! use bit_buffer::{BitBuffer, BitBufferError, Whence};
//!
//! let buf = BitBuffer::from_bytes(&[0b1111_0000, 0b0000_0001], 16);
//! let mut cursor = buf.cursor();
//!
//! assert_eq!(cursor.read_bits(4).unwrap(), 15);
//! cursor.seek(4, Whence::Start).unwrap();
//! assert_eq!(cursor.read_bits(4).unwrap(), 0);
//! assert_eq!(cursor.read_bits(8).unwrap(), 1);
//! assert_eq!(cursor.read_bits(1), Err(BitBufferError::EndOfInput));
//! ```

use crate::log::{debug, trace};
use crate::{BitBuffer, BitBufferError, Result};

/// Reference point for [`Cursor::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// `offset` is the new position.
    Start,
    /// `offset` is added to the current position.
    Current,
    /// `offset` is subtracted from the buffer length.
    End,
}

impl TryFrom<i32> for Whence {
    type Error = BitBufferError;

    /// `0`, `1` and `2` map to `Start`, `Current` and `End`.
    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            other => Err(BitBufferError::InvalidWhence(other)),
        }
    }
}

/// Sequential reader bound to one buffer. Never mutates the buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a BitBuffer,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a BitBuffer) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current bit offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    pub fn get_ref(&self) -> &'a BitBuffer {
        self.source
    }

    /// Reads `count` bits as an unsigned integer and advances past them.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::EndOfInput`] if the cursor is already at or past the
    /// end. Only the current position is checked: a read that starts inside
    /// the buffer but runs past its storage fails with the
    /// [`OutOfRange`](BitBufferError::OutOfRange) error of
    /// [`BitBuffer::read_unsigned`], and the position is left unchanged.
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        if self.position >= self.source.len() {
            return Err(BitBufferError::EndOfInput);
        }
        let value = self.source.read_unsigned(self.position, count)?;
        trace!(position = self.position, count, value, "cursor read");
        self.position += count;
        Ok(value)
    }

    /// Reads one bit and advances by one. Past the end this yields `false`.
    pub fn read_bit(&mut self) -> bool {
        let bit = self.source.test(self.position);
        self.position = self.position.saturating_add(1);
        bit
    }

    /// Moves the cursor and returns the new position.
    ///
    /// On error the position is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`BitBufferError::InvalidOffset`] if the target is negative.
    /// - [`BitBufferError::EndOfInput`] if the target is past the end.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<usize> {
        // Widened so a far seek past either end is classified, not wrapped.
        let len = self.source.len() as i128;
        let candidate = match whence {
            Whence::Start => i128::from(offset),
            Whence::Current => self.position as i128 + i128::from(offset),
            Whence::End => len - i128::from(offset),
        };

        if candidate < 0 {
            debug!(offset, ?whence, candidate, "seek before start");
            // Negative candidates always fit in i64.
            return Err(BitBufferError::InvalidOffset(candidate as i64));
        }
        if candidate > len {
            debug!(offset, ?whence, candidate, len, "seek past end");
            return Err(BitBufferError::EndOfInput);
        }

        self.position = candidate as usize;
        Ok(self.position)
    }

    /// [`seek`](Self::seek) with the reference point given as `0`, `1` or `2`.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::InvalidWhence`] for any other value, plus the errors
    /// of [`seek`](Self::seek).
    pub fn seek_raw(&mut self, offset: i64, whence: i32) -> Result<usize> {
        self.seek(offset, Whence::try_from(whence)?)
    }
}
