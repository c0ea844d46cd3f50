//! Construction options for [`BitBuffer`].
//!
//! ```rust
//! use bit_buffer::{BitBuffer, BitBufferConfig};
//!
//! let buf = BitBufferConfig::new()
//!     .bytes(vec![0b1010_1111])
//!     .bit_length(4)
//!     .build();
//!
//! assert_eq!(buf.len(), 4);
//! assert_eq!(buf.as_bytes(), &[0b1010_0000]);
//! # let _: BitBuffer = buf;
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::BitBuffer;

/// Initial contents of a [`BitBuffer`].
///
/// Both fields are optional. `initial_bytes` defaults to empty and
/// `initial_bit_length` defaults to every bit of `initial_bytes`, so the
/// default configuration yields an empty buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBufferConfig {
    pub initial_bytes: Vec<u8>,
    pub initial_bit_length: Option<usize>,
}

impl BitBufferConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.initial_bytes = bytes.into();
        self
    }

    pub fn bit_length(mut self, bits: usize) -> Self {
        self.initial_bit_length = Some(bits);
        self
    }

    /// Effective bit length after defaults are applied.
    pub fn resolved_bit_length(&self) -> usize {
        self.initial_bit_length
            .unwrap_or(self.initial_bytes.len() * 8)
    }

    pub fn build(self) -> BitBuffer {
        BitBuffer::with_config(self)
    }
}
